//! Backend slices the chat session is written against.
//!
//! [`ApiClient`] implements both; tests substitute an in-memory backend.

use async_trait::async_trait;

use gigmarket_shared::models::{ChatMessage, ChatThread, NewChatMessage};
use gigmarket_shared::types::{ChatId, JobId, UserId};

use crate::client::ApiClient;
use crate::error::Result;

#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn user_id_for_email(&self, email: &str) -> Result<UserId>;
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn locate_chat(&self, job: &JobId, client: &UserId, freelancer: &UserId)
        -> Result<ChatThread>;

    async fn chat_messages(&self, chat: &ChatId) -> Result<Vec<ChatMessage>>;

    async fn send_chat_message(&self, chat: &ChatId, message: &NewChatMessage) -> Result<()>;
}

#[async_trait]
impl IdentityApi for ApiClient {
    async fn user_id_for_email(&self, email: &str) -> Result<UserId> {
        ApiClient::user_id_for_email(self, email).await
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn locate_chat(
        &self,
        job: &JobId,
        client: &UserId,
        freelancer: &UserId,
    ) -> Result<ChatThread> {
        ApiClient::locate_chat(self, job, client, freelancer).await
    }

    async fn chat_messages(&self, chat: &ChatId) -> Result<Vec<ChatMessage>> {
        ApiClient::chat_messages(self, chat).await
    }

    async fn send_chat_message(&self, chat: &ChatId, message: &NewChatMessage) -> Result<()> {
        ApiClient::send_chat_message(self, chat, message).await
    }
}
