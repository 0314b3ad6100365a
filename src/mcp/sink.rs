//! Progress notifications over MCP logging messages

use crate::tools::ProgressSink;
use async_trait::async_trait;
use rmcp::model::{LoggingLevel, LoggingMessageNotificationParam};
use rmcp::service::{Peer, RoleServer};

/// Logger name attached to every notification
pub const LOGGER_NAME: &str = "upbit-candles";

/// Forwards tool progress to the connected client
pub struct PeerSink {
    peer: Peer<RoleServer>,
}

impl PeerSink {
    pub fn new(peer: Peer<RoleServer>) -> Self {
        Self { peer }
    }

    async fn send(&self, level: LoggingLevel, message: &str) {
        let param = LoggingMessageNotificationParam {
            level,
            logger: Some(LOGGER_NAME.to_string()),
            data: serde_json::Value::String(message.to_string()),
        };

        if let Err(e) = self.peer.notify_logging_message(param).await {
            tracing::debug!(error = %e, "Dropped progress notification");
        }
    }
}

#[async_trait]
impl ProgressSink for PeerSink {
    async fn info(&self, message: &str) {
        self.send(LoggingLevel::Info, message).await;
    }

    async fn error(&self, message: &str) {
        self.send(LoggingLevel::Error, message).await;
    }
}
