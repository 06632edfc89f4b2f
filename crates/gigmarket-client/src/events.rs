use serde::Serialize;
use tokio::sync::mpsc;

use gigmarket_shared::models::ChatMessage;
use gigmarket_shared::types::ChatId;

/// Notifications pushed from background work (the poller, the composer) to
/// whoever renders the chat.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    MessagesUpdated(MessagesPayload),
    PollFailed(PollFailedPayload),
    MessageSent(MessageSentPayload),
    PollerStopped { chat_id: ChatId },
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::MessagesUpdated(_) => "messages-updated",
            ClientEvent::PollFailed(_) => "poll-failed",
            ClientEvent::MessageSent(_) => "message-sent",
            ClientEvent::PollerStopped { .. } => "poller-stopped",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesPayload {
    pub chat_id: ChatId,
    pub seq: u64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PollFailedPayload {
    pub chat_id: ChatId,
    pub seq: u64,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageSentPayload {
    pub chat_id: ChatId,
    pub content: String,
}

/// Cloneable sending half.  A disabled sink drops everything.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<mpsc::UnboundedSender<ClientEvent>>,
}

impl EventSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ClientEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ClientEvent) {
        let Some(tx) = &self.tx else { return };
        let name = event.name();
        if tx.send(event).is_err() {
            tracing::warn!(event = name, "Failed to emit event, receiver dropped");
        }
    }
}
