//! Live conversation between a client and a freelancer about one job.
//!
//! A [`ChatSession`] walks through locate → poll → compose:
//!
//! 1. Wait until the job, client and freelancer ids are all known (the
//!    client id may come from the identity resolver).
//! 2. Locate the thread, which the backend creates on first access, and
//!    seed the view with its messages.
//! 3. Start a [`MessagePoller`] and accept drafts through the [`Composer`].
//!
//! [`ChatSession::close`] stops polling; after it returns the view is never
//! written again.

pub mod composer;
pub mod poller;
pub mod thread;

#[cfg(test)]
mod fake;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use gigmarket_api::{ChatApi, IdentityApi};
use gigmarket_shared::types::{ChatId, JobId, Role, UserId};

use crate::error::{ClientError, Result};
use crate::events::{ClientEvent, EventSink, MessageSentPayload, MessagesPayload};
use crate::identity::IdentityResolver;

pub use composer::Composer;
pub use poller::MessagePoller;
pub use thread::{render_messages, MessageView, SharedThread, ThreadView};

/// The triple that identifies a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatKey {
    pub job_id: Option<JobId>,
    pub client_id: Option<UserId>,
    pub freelancer_id: Option<UserId>,
}

impl ChatKey {
    pub fn new(job_id: JobId, client_id: UserId, freelancer_id: UserId) -> Self {
        Self {
            job_id: Some(job_id),
            client_id: Some(client_id),
            freelancer_id: Some(freelancer_id),
        }
    }

    /// All three ids, if every one is present and non-blank.
    pub fn parts(&self) -> Option<(&JobId, &UserId, &UserId)> {
        let job = self.job_id.as_ref().filter(|id| !id.is_blank())?;
        let client = self.client_id.as_ref().filter(|id| !id.is_blank())?;
        let freelancer = self.freelancer_id.as_ref().filter(|id| !id.is_blank())?;
        Some((job, client, freelancer))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    /// Some id is still missing; nothing has been requested.
    Deferred,
    Ready(ChatId),
    Failed(String),
    Closed,
}

pub struct ChatSession<B: ?Sized> {
    backend: Arc<B>,
    key: ChatKey,
    role: Role,
    identity: IdentityResolver<B>,
    thread: SharedThread,
    phase: ChatPhase,
    poller: Option<MessagePoller>,
    composer: Composer,
    poll_interval: Duration,
    events: EventSink,
}

impl<B> ChatSession<B>
where
    B: ChatApi + IdentityApi + ?Sized + 'static,
{
    pub fn new(backend: Arc<B>, key: ChatKey, role: Role, poll_interval: Duration) -> Self {
        Self {
            identity: IdentityResolver::new(backend.clone()),
            backend,
            key,
            role,
            thread: ThreadView::shared(),
            phase: ChatPhase::Idle,
            poller: None,
            composer: Composer::default(),
            poll_interval,
            events: EventSink::disabled(),
        }
    }

    /// Reuse an identity resolver, typically one already resolved.
    pub fn with_identity(mut self, identity: IdentityResolver<B>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = events;
        self
    }

    pub fn phase(&self) -> &ChatPhase {
        &self.phase
    }

    pub fn key(&self) -> &ChatKey {
        &self.key
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    /// The id messages are sent as, chosen by role.
    pub fn own_sender_id(&self) -> Option<&UserId> {
        match self.role {
            Role::Freelancer => self.key.freelancer_id.as_ref(),
            Role::Client => self.key.client_id.as_ref(),
        }
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    /// Current messages with the "mine" flag applied.
    pub async fn messages(&self) -> Vec<MessageView> {
        let view = self.thread.lock().await;
        render_messages(view.messages(), self.own_sender_id())
    }

    /// Locate the thread and start polling.
    ///
    /// When chatting as the client, a missing client id is filled from
    /// `email` through the identity resolver.  A freelancer never stands in
    /// for the client.  If any id is still missing the session stays
    /// [`ChatPhase::Deferred`] and nothing is requested.  Calling this again
    /// after `Deferred` or `Failed` retries.
    pub async fn open(&mut self, email: Option<&str>) -> &ChatPhase {
        if matches!(self.phase, ChatPhase::Ready(_)) {
            return &self.phase;
        }
        if self.phase == ChatPhase::Closed {
            self.thread = ThreadView::shared();
        }

        let client_missing = self.key.client_id.as_ref().map_or(true, |id| id.is_blank());
        if client_missing && self.role == Role::Client {
            if let Some(email) = email {
                if let Some(id) = self.identity.resolve(email).await {
                    self.key.client_id = Some(id);
                }
            }
        }

        let Some((job, client, freelancer)) = self.key.parts() else {
            debug!(key = ?self.key, "Chat key incomplete, deferring");
            self.phase = ChatPhase::Deferred;
            return &self.phase;
        };

        match self.backend.locate_chat(job, client, freelancer).await {
            Ok(located) => {
                let chat_id = located.id;
                {
                    let mut view = self.thread.lock().await;
                    let seq = view.next_seq();
                    view.apply(seq, located.messages);
                    self.events.emit(ClientEvent::MessagesUpdated(MessagesPayload {
                        chat_id: chat_id.clone(),
                        seq,
                        messages: view.messages().to_vec(),
                    }));
                }
                info!(chat = %chat_id, job = %job, "Chat located");

                self.poller = Some(MessagePoller::start(
                    self.backend.clone(),
                    chat_id.clone(),
                    self.thread.clone(),
                    self.poll_interval,
                    self.events.clone(),
                ));
                self.phase = ChatPhase::Ready(chat_id);
            }
            Err(e) => {
                warn!(job = %job, error = %e, "Failed to locate chat");
                self.phase = ChatPhase::Failed("Unable to load chat".to_string());
            }
        }
        &self.phase
    }

    /// Send the current draft, then refresh once without waiting for the
    /// next tick.  On failure the draft is kept.
    pub async fn send(&mut self) -> Result<()> {
        let chat_id = match &self.phase {
            ChatPhase::Ready(chat_id) => chat_id.clone(),
            ChatPhase::Deferred => return Err(ClientError::Deferred),
            _ => return Err(ClientError::NotReady("chat")),
        };
        let sender = self
            .own_sender_id()
            .cloned()
            .ok_or(ClientError::NotReady("sender id"))?;

        let content = self
            .composer
            .send(&*self.backend, &chat_id, &sender)
            .await?;
        self.events.emit(ClientEvent::MessageSent(MessageSentPayload {
            chat_id: chat_id.clone(),
            content,
        }));

        let seq = self.thread.lock().await.next_seq();
        poller::fetch_and_apply(&*self.backend, &chat_id, &self.thread, seq, &self.events).await;
        Ok(())
    }

    /// Stop polling.  No fetch started before this call can touch the view
    /// afterwards.
    pub async fn close(&mut self) {
        self.thread.lock().await.close();
        if let Some(mut poller) = self.poller.take() {
            poller.stop().await;
            self.events.emit(ClientEvent::PollerStopped {
                chat_id: poller.chat_id().clone(),
            });
        }
        self.phase = ChatPhase::Closed;
    }
}
