//! Process signals that end a console session
//!
//! In raw mode Ctrl+C arrives as a key, so a signal here means the console
//! was asked to stop from outside (`kill`, a closed terminal, a supervisor).
//! Each one quits without the confirmation dialog.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use sgc_core::prelude::*;

/// Signal that stops the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl StopSignal {
    pub fn name(&self) -> &'static str {
        match self {
            StopSignal::Interrupt => "SIGINT",
            StopSignal::Terminate => "SIGTERM",
            StopSignal::Hangup => "SIGHUP",
        }
    }
}

impl From<StopSignal> for Message {
    fn from(_: StopSignal) -> Self {
        Message::Quit
    }
}

/// Forward the first stop signal to the update loop as [`Message::Quit`].
///
/// The returned handle is aborted by the runner once the loop ends.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = match next_stop_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signals will not stop the console: {}", e);
                return;
            }
        };
        info!("{} received, leaving the console", signal.name());
        if tx.send(signal.into()).await.is_err() {
            debug!("Update loop already gone, ignoring {}", signal.name());
        }
    })
}

#[cfg(unix)]
async fn next_stop_signal() -> Result<StopSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, signal_name: &str| {
        signal(kind).map_err(|e| Error::signal(format!("cannot listen for {}: {}", signal_name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => StopSignal::Interrupt,
        _ = terminate.recv() => StopSignal::Terminate,
        _ = hangup.recv() => StopSignal::Hangup,
    })
}

#[cfg(not(unix))]
async fn next_stop_signal() -> Result<StopSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(StopSignal::Interrupt)
}
