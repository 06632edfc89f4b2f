use reqwest::Method;
use tracing::{debug, info};

use gigmarket_shared::models::{ChatMessage, ChatThread, NewChatMessage};
use gigmarket_shared::types::{ChatId, JobId, UserId};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /api/chats?jobId=&clientId=&freelancerId=`.  The backend creates
    /// the thread if it does not exist yet.
    pub async fn locate_chat(
        &self,
        job: &JobId,
        client: &UserId,
        freelancer: &UserId,
    ) -> Result<ChatThread> {
        let req = self.request(Method::GET, "/api/chats").query(&[
            ("jobId", job.as_str()),
            ("clientId", client.as_str()),
            ("freelancerId", freelancer.as_str()),
        ]);
        let thread: ChatThread = self.fetch(req).await?;
        debug!(chat = %thread.id, messages = thread.messages.len(), "Chat located");
        Ok(thread)
    }

    /// `GET /api/chats/:id/messages`
    pub async fn chat_messages(&self, chat: &ChatId) -> Result<Vec<ChatMessage>> {
        let req = self.request(Method::GET, &format!("/api/chats/{chat}/messages"));
        self.fetch(req).await
    }

    /// `POST /api/chats/:id/messages`
    pub async fn send_chat_message(&self, chat: &ChatId, message: &NewChatMessage) -> Result<()> {
        let req = self
            .request(Method::POST, &format!("/api/chats/{chat}/messages"))
            .json(message);
        self.execute(req).await?;
        info!(chat = %chat, sender = %message.sender_id, "Message sent");
        Ok(())
    }
}
