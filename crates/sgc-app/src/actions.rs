//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! REST actions run on their own tokio task and report back through the
//! message channel. The log stream is the only task kept (and aborted).

use sgc_api::{log_stream_url, ApiResponse, Backend, LogTail};
use sgc_core::prelude::*;
use sgc_core::ApiFailure;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Mutations are acknowledged with HTTP 200 and nothing else
fn acknowledged(result: Result<ApiResponse<()>>) -> std::result::Result<(), ApiFailure> {
    match result {
        Ok(response) if response.is_ok() => Ok(()),
        Ok(response) => Err(ApiFailure::Unexpected {
            status: response.status,
        }),
        Err(err) => Err(err.into_api_failure()),
    }
}

/// Run one REST action to completion, returning the messages it reports
pub async fn execute_request<B>(backend: &B, action: UpdateAction) -> Vec<Message>
where
    B: Backend + Sync,
{
    let msg = match action {
        UpdateAction::LoadAccounts => match backend.list_accounts().await {
            Ok(response) => Message::AccountsLoaded {
                accounts: response.data,
            },
            Err(err) => Message::AccountsLoadFailed {
                error: err.into_api_failure(),
            },
        },

        UpdateAction::TestAccount { request } => {
            let id = request.id;
            match acknowledged(backend.test_email(&request).await) {
                Ok(()) => Message::AccountTestSucceeded { id },
                Err(error) => Message::AccountTestFailed { id, error },
            }
        }

        UpdateAction::DeleteAccount { account } => {
            let id = account.id;
            match acknowledged(backend.delete_account(&account).await) {
                Ok(()) => Message::AccountDeleted { id },
                Err(error) => Message::AccountDeleteFailed { id, error },
            }
        }

        UpdateAction::SaveAccount { account } => {
            let result = if account.is_persisted() {
                backend.update_account(&account).await
            } else {
                backend.create_account(&account).await
            };
            match acknowledged(result) {
                Ok(()) => Message::AccountSaved,
                Err(error) => Message::AccountSaveFailed { error },
            }
        }

        UpdateAction::TestConnectivity { request } => {
            match acknowledged(backend.test_email(&request).await) {
                Ok(()) => Message::ConnectivityVerified,
                Err(error) => Message::ConnectivityFailed { error },
            }
        }

        UpdateAction::LoadJobs => match backend.list_jobs().await {
            Ok(response) => Message::JobsLoaded {
                jobs: response.data,
            },
            Err(err) => Message::JobsLoadFailed {
                error: err.into_api_failure(),
            },
        },

        UpdateAction::UpdateJobStatus { job } => {
            let (id, status) = (job.id, job.status);
            match acknowledged(backend.update_job(&job).await) {
                Ok(()) => Message::JobToggled { id, status },
                Err(error) => Message::JobToggleFailed { id, error },
            }
        }

        UpdateAction::DeleteJob { job } => {
            let id = job.id;
            match acknowledged(backend.delete_job(&job).await) {
                Ok(()) => Message::JobDeleted { id },
                Err(error) => Message::JobDeleteFailed { id, error },
            }
        }

        UpdateAction::LoadJobEditorChoices => {
            let (accounts, templates) =
                tokio::join!(backend.list_accounts(), backend.list_templates());
            let accounts = match accounts {
                Ok(response) => Message::JobAccountsLoaded {
                    accounts: response.data,
                },
                Err(err) => Message::JobAccountsLoadFailed {
                    error: err.into_api_failure(),
                },
            };
            let templates = match templates {
                Ok(response) => Message::JobTemplatesLoaded {
                    templates: response.data,
                },
                Err(err) => Message::JobTemplatesLoadFailed {
                    error: err.into_api_failure(),
                },
            };
            return vec![accounts, templates];
        }

        UpdateAction::TestPattern { probe } => match backend.test_pattern(&probe).await {
            Ok(response) => Message::PatternMatched {
                text: response.data,
            },
            Err(err) => Message::PatternFailed {
                error: err.into_api_failure(),
            },
        },

        UpdateAction::SaveJob { job } => {
            let result = if job.is_persisted() {
                backend.update_job(&job).await
            } else {
                backend.create_job(&job).await
            };
            match acknowledged(result) {
                Ok(()) => Message::JobSaved,
                Err(error) => Message::JobSaveFailed { error },
            }
        }

        UpdateAction::LoadTemplates => match backend.list_templates().await {
            Ok(response) => Message::TemplatesLoaded {
                templates: response.data,
            },
            Err(err) => Message::TemplatesLoadFailed {
                error: err.into_api_failure(),
            },
        },

        UpdateAction::DeleteTemplate { template } => {
            let id = template.id;
            match acknowledged(backend.delete_template(&template).await) {
                Ok(()) => Message::TemplateDeleted { id },
                Err(error) => Message::TemplateDeleteFailed { id, error },
            }
        }

        UpdateAction::SaveTemplate { template } => {
            let result = if template.is_persisted() {
                backend.update_template(&template).await
            } else {
                backend.create_template(&template).await
            };
            match acknowledged(result) {
                Ok(()) => Message::TemplateSaved,
                Err(error) => Message::TemplateSaveFailed { error },
            }
        }

        UpdateAction::ConnectLogStream { .. } | UpdateAction::DisconnectLogStream => {
            return Vec::new();
        }
    };
    vec![msg]
}

/// Stream log lines until the connection ends or the task is aborted
async fn run_log_stream(root_path: String, generation: u64, msg_tx: mpsc::Sender<Message>) {
    let closed = |reason: Option<String>| Message::LogStreamClosed { generation, reason };

    let url = match log_stream_url(&root_path) {
        Ok(url) => url,
        Err(err) => {
            let _ = msg_tx.send(closed(Some(err.to_string()))).await;
            return;
        }
    };

    let mut tail = match LogTail::connect(&url).await {
        Ok(tail) => tail,
        Err(err) => {
            warn!("Log stream unavailable: {}", err);
            let _ = msg_tx.send(closed(Some(err.to_string()))).await;
            return;
        }
    };

    if msg_tx
        .send(Message::LogStreamOpened { generation })
        .await
        .is_err()
    {
        return;
    }

    loop {
        match tail.next_line().await {
            Some(Ok(line)) => {
                if msg_tx
                    .send(Message::LogLine { generation, line })
                    .await
                    .is_err()
                {
                    break;
                }
            }
            Some(Err(err)) => {
                let _ = msg_tx.send(closed(Some(err.to_string()))).await;
                break;
            }
            None => {
                let _ = msg_tx.send(closed(None)).await;
                break;
            }
        }
    }
    tail.close().await;
}

/// Executes actions against a backend, owning the log stream task
pub struct ActionContext<B> {
    backend: B,
    root_path: String,
    msg_tx: mpsc::Sender<Message>,
    log_task: Option<JoinHandle<()>>,
}

impl<B> ActionContext<B>
where
    B: Backend + Clone + Sync + 'static,
{
    pub fn new(backend: B, root_path: impl Into<String>, msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            backend,
            root_path: root_path.into(),
            msg_tx,
            log_task: None,
        }
    }

    /// Execute an action by spawning a background task
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::ConnectLogStream { generation } => {
                self.disconnect_log_stream();
                debug!("Starting log stream (generation {})", generation);
                let task = run_log_stream(self.root_path.clone(), generation, self.msg_tx.clone());
                self.log_task = Some(tokio::spawn(task));
            }
            UpdateAction::DisconnectLogStream => self.disconnect_log_stream(),
            action => {
                let backend = self.backend.clone();
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    for msg in execute_request(&backend, action).await {
                        if msg_tx.send(msg).await.is_err() {
                            debug!("Message channel closed, dropping action result");
                            break;
                        }
                    }
                });
            }
        }
    }

    pub fn has_log_stream(&self) -> bool {
        self.log_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn disconnect_log_stream(&mut self) {
        if let Some(task) = self.log_task.take() {
            debug!("Aborting log stream");
            task.abort();
        }
    }
}

impl<B> Drop for ActionContext<B> {
    fn drop(&mut self) {
        if let Some(task) = self.log_task.take() {
            task.abort();
        }
    }
}
