//! In-memory backend for chat tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use gigmarket_api::{ApiError, ChatApi, IdentityApi, Result};
use gigmarket_shared::models::{ChatMessage, ChatThread, NewChatMessage};
use gigmarket_shared::types::{ChatId, JobId, MessageId, UserId};

pub fn msg(id: u64, sender: u64, content: &str) -> ChatMessage {
    ChatMessage {
        id: MessageId::from(id),
        sender_id: UserId::from(sender),
        content: content.to_string(),
        created_at: None,
    }
}

#[derive(Default)]
pub struct FakeBackend {
    stored: Mutex<Vec<ChatMessage>>,
    scripted: Mutex<VecDeque<(Duration, Vec<ChatMessage>)>>,
    next_id: AtomicU64,
    pub sent: Mutex<Vec<NewChatMessage>>,
    pub fetches: AtomicUsize,
    pub locates: AtomicUsize,
    pub identity_lookups: AtomicUsize,
    pub fail_send: AtomicBool,
    pub fail_locate: AtomicBool,
}

impl FakeBackend {
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        let backend = Self::default();
        backend.next_id.store(100, Ordering::SeqCst);
        *backend.stored.lock().unwrap() = messages;
        backend
    }

    /// Queue a reply for the next `chat_messages` call, delivered after
    /// `delay`.
    pub fn script(&self, delay: Duration, messages: Vec<ChatMessage>) {
        self.scripted.lock().unwrap().push_back((delay, messages));
    }

    pub fn resolved_id() -> UserId {
        UserId::from(1)
    }
}

#[async_trait]
impl IdentityApi for FakeBackend {
    async fn user_id_for_email(&self, _email: &str) -> Result<UserId> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(Self::resolved_id())
    }
}

#[async_trait]
impl ChatApi for FakeBackend {
    async fn locate_chat(&self, _job: &JobId, _client: &UserId, _freelancer: &UserId) -> Result<ChatThread> {
        self.locates.fetch_add(1, Ordering::SeqCst);
        if self.fail_locate.load(Ordering::SeqCst) {
            return Err(ApiError::Decode("no chat".into()));
        }
        Ok(ChatThread {
            id: ChatId::from(99),
            messages: self.stored.lock().unwrap().clone(),
        })
    }

    async fn chat_messages(&self, _chat: &ChatId) -> Result<Vec<ChatMessage>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some((delay, messages)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(messages)
            }
            None => Ok(self.stored.lock().unwrap().clone()),
        }
    }

    async fn send_chat_message(&self, _chat: &ChatId, message: &NewChatMessage) -> Result<()> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(ApiError::Decode("send failed".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.stored.lock().unwrap().push(ChatMessage {
            id: MessageId::from(id),
            sender_id: message.sender_id.clone(),
            content: message.content.clone(),
            created_at: None,
        });
        Ok(())
    }
}
