use tracing::{info, warn};

use gigmarket_api::ChatApi;
use gigmarket_shared::models::NewChatMessage;
use gigmarket_shared::types::{ChatId, UserId};
use gigmarket_shared::validate;

use crate::error::Result;

/// The message being typed.  The draft only clears once the backend has
/// accepted it.
#[derive(Debug, Default)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Post the trimmed draft as `sender`.  Whitespace-only drafts are
    /// rejected without a request.  Returns the content that was sent.
    pub async fn send<B>(&mut self, backend: &B, chat: &ChatId, sender: &UserId) -> Result<String>
    where
        B: ChatApi + ?Sized,
    {
        let content = validate::message_text(&self.draft)?.to_string();
        let message = NewChatMessage {
            sender_id: sender.clone(),
            content,
        };

        if let Err(e) = backend.send_chat_message(chat, &message).await {
            warn!(chat = %chat, error = %e, "Failed to send message, draft kept");
            return Err(e.into());
        }

        info!(chat = %chat, sender = %sender, "Message sent");
        self.draft.clear();
        Ok(message.content)
    }
}
