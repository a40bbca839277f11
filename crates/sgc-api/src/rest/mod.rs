//! HTTP implementation of [`Backend`]
//!
//! Every call goes to `{root_path}/api/v1/{resource}`. Successful bodies are
//! `{message, data}` envelopes; failed ones may carry `{message, reason}`.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use sgc_core::prelude::*;
use sgc_core::{Account, ApiFailure, Job, Template, TestEmailRequest};

use crate::backend::{ApiResponse, Backend, PatternProbe};

const API_PREFIX: &str = "api/v1/";

pub const ACCOUNT_PATH: &str = "account";
pub const JOB_PATH: &str = "job";
pub const TEMPLATE_PATH: &str = "template";
pub const TEST_EMAIL_PATH: &str = "testemail";
pub const TEST_PATTERN_PATH: &str = "testpattern";
pub const LOG_STREAM_PATH: &str = "websocket";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// Map a non-2xx response onto the failure taxonomy
fn classify_failure(status: u16, body: &str) -> ApiFailure {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.message {
        Some(message) if !message.trim().is_empty() => {
            ApiFailure::backend(status, message, parsed.reason.unwrap_or_default())
        }
        _ => ApiFailure::Unexpected { status },
    }
}

/// Parse a configured root path, requiring http(s)
pub fn parse_root(root_path: &str) -> Result<Url> {
    let mut url = Url::parse(root_path.trim())
        .map_err(|e| Error::invalid_url(root_path, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_url(
                root_path,
                format!("unsupported scheme '{}'", other),
            ))
        }
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// REST client bound to one backend
#[derive(Debug, Clone)]
pub struct RestClient {
    root: Url,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(root_path: &str) -> Result<Self> {
        Ok(Self {
            root: parse_root(root_path)?,
            http: reqwest::Client::new(),
        })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    fn endpoint(&self, resource: &str) -> Result<Url> {
        self.root
            .join(API_PREFIX)
            .and_then(|api| api.join(resource))
            .map_err(|e| Error::invalid_url(self.root.as_str(), e.to_string()))
    }

    fn request(&self, method: Method, resource: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(resource)?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    /// Send and return `(status, body)` of a 2xx response
    async fn execute(&self, request: RequestBuilder, what: &str) -> Result<(u16, String)> {
        let response = request.send().await.map_err(|e| {
            warn!("{} failed to reach backend: {}", what, e);
            Error::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("{} failed reading response body: {}", what, e);
            Error::transport(e.to_string())
        })?;

        if !(200..300).contains(&status) {
            let failure = classify_failure(status, &body);
            warn!("{} returned HTTP {}: {}", what, status, failure);
            return Err(failure.into());
        }
        Ok((status, body))
    }

    async fn fetch<T>(&self, resource: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.request(Method::GET, resource)?;
        let (status, body) = self.execute(request, &format!("GET {}", resource)).await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(ApiResponse::new(status, envelope.data.unwrap_or_default()))
    }

    async fn send_json<B>(&self, method: Method, resource: &str, body: &B) -> Result<ApiResponse<()>>
    where
        B: Serialize + ?Sized,
    {
        let what = format!("{} {}", method, resource);
        let request = self.request(method, resource)?.json(body);
        let (status, _) = self.execute(request, &what).await?;
        Ok(ApiResponse::new(status, ()))
    }
}

impl Backend for RestClient {
    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>> {
        self.fetch(ACCOUNT_PATH).await
    }

    async fn create_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.send_json(Method::POST, ACCOUNT_PATH, account).await
    }

    async fn update_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.send_json(Method::PUT, ACCOUNT_PATH, account).await
    }

    async fn delete_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.send_json(Method::DELETE, ACCOUNT_PATH, account).await
    }

    async fn test_email(&self, request: &TestEmailRequest) -> Result<ApiResponse<()>> {
        self.send_json(Method::POST, TEST_EMAIL_PATH, request).await
    }

    async fn list_jobs(&self) -> Result<ApiResponse<Vec<Job>>> {
        self.fetch(JOB_PATH).await
    }

    async fn create_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.send_json(Method::POST, JOB_PATH, job).await
    }

    async fn update_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.send_json(Method::PUT, JOB_PATH, job).await
    }

    async fn delete_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.send_json(Method::DELETE, JOB_PATH, job).await
    }

    async fn test_pattern(&self, probe: &PatternProbe) -> Result<ApiResponse<String>> {
        let request = self.request(Method::GET, TEST_PATTERN_PATH)?.query(probe);
        let (status, body) = self.execute(request, "GET testpattern").await?;
        let envelope: Envelope<String> = serde_json::from_str(&body)?;
        Ok(ApiResponse::new(status, envelope.data.unwrap_or_default()))
    }

    async fn list_templates(&self) -> Result<ApiResponse<Vec<Template>>> {
        self.fetch(TEMPLATE_PATH).await
    }

    async fn create_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.send_json(Method::POST, TEMPLATE_PATH, template).await
    }

    async fn update_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.send_json(Method::PUT, TEMPLATE_PATH, template).await
    }

    async fn delete_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.send_json(Method::DELETE, TEMPLATE_PATH, template).await
    }
}
