//! Live tail of the backend's log over WebSocket
//!
//! The backend only starts streaming after the client sends its first frame,
//! then pushes one text frame per log line until either side closes.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use url::Url;

use sgc_core::prelude::*;

use crate::rest::{parse_root, LOG_STREAM_PATH};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Frame sent to ask the backend to begin streaming
pub const START_FRAME: &str = "start";

/// `ws(s)://.../api/v1/websocket` for an http(s) root path
pub fn log_stream_url(root_path: &str) -> Result<Url> {
    let root = parse_root(root_path)?;
    let mut url = root
        .join("api/v1/")
        .and_then(|api| api.join(LOG_STREAM_PATH))
        .map_err(|e| Error::invalid_url(root_path, e.to_string()))?;

    let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
    url.set_scheme(scheme)
        .map_err(|_| Error::invalid_url(root_path, "cannot derive websocket scheme"))?;
    Ok(url)
}

/// An open log stream
pub struct LogTail {
    ws: WsStream,
}

impl std::fmt::Debug for LogTail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogTail").finish_non_exhaustive()
    }
}

impl LogTail {
    /// Connect and send the start frame
    pub async fn connect(url: &Url) -> Result<Self> {
        debug!("Connecting log stream: {}", url);
        let (mut ws, _response) = connect_async(url.as_str())
            .await
            .map_err(|e| Error::log_stream(format!("Failed to connect: {e}")))?;

        ws.send(WsMessage::Text(START_FRAME.into()))
            .await
            .map_err(|e| Error::log_stream(format!("Failed to send start frame: {e}")))?;

        info!("Log stream connected: {}", url);
        Ok(Self { ws })
    }

    /// Next log line; `None` once the stream has ended cleanly
    pub async fn next_line(&mut self) -> Option<Result<String>> {
        loop {
            match self.ws.next().await {
                Some(Ok(WsMessage::Text(text))) => return Some(Ok(text.to_string())),
                Some(Ok(WsMessage::Binary(bytes))) => {
                    return Some(Ok(String::from_utf8_lossy(&bytes).into_owned()))
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    debug!("Log stream: received Close frame {:?}", frame);
                    return None;
                }
                Some(Ok(_)) => {
                    // Ping/Pong are answered by tungstenite
                }
                Some(Err(err)) => {
                    warn!("Log stream read error: {}", err);
                    return Some(Err(Error::log_stream(err.to_string())));
                }
                None => return None,
            }
        }
    }

    pub async fn close(mut self) {
        if let Err(err) = self.ws.close(None).await {
            debug!("Log stream close: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_log_stream_url_scheme() {
        assert_eq!(
            log_stream_url("http://localhost:8080").unwrap().as_str(),
            "ws://localhost:8080/api/v1/websocket"
        );
        assert_eq!(
            log_stream_url("https://example.com/console/").unwrap().as_str(),
            "wss://example.com/console/api/v1/websocket"
        );
    }

    #[test]
    fn test_log_stream_url_rejects_bad_root() {
        assert!(log_stream_url("ftp://example.com").is_err());
    }

    #[tokio::test]
    async fn test_streams_lines_after_start_frame() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            let first = ws.next().await.unwrap().unwrap();
            assert_eq!(first, WsMessage::Text(START_FRAME.into()));
            ws.send(WsMessage::Text("line one".into())).await.unwrap();
            ws.send(WsMessage::Text("line two".into())).await.unwrap();
            ws.close(None).await.unwrap();
        });

        let url = log_stream_url(&format!("http://{}", addr)).unwrap();
        let mut tail = LogTail::connect(&url).await.unwrap();
        assert_eq!(tail.next_line().await.unwrap().unwrap(), "line one");
        assert_eq!(tail.next_line().await.unwrap().unwrap(), "line two");
        assert!(tail.next_line().await.is_none());

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_failure_is_log_stream_error() {
        let url = log_stream_url("http://127.0.0.1:1").unwrap();
        let err = LogTail::connect(&url).await.unwrap_err();
        assert!(matches!(err, Error::LogStream { .. }));
    }
}
