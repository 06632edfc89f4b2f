use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use gigmarket_shared::models::ChatMessage;
use gigmarket_shared::types::{MessageId, UserId};

pub type SharedThread = Arc<Mutex<ThreadView>>;

/// Local copy of a thread's messages.
///
/// Every fetch is stamped with a sequence number from [`ThreadView::next_seq`]
/// before it is sent.  A response only replaces the list when its number is
/// newer than the last one applied, so a slow fetch can never roll the view
/// back.  Once closed, nothing is applied.
#[derive(Debug, Default)]
pub struct ThreadView {
    messages: Vec<ChatMessage>,
    issued: u64,
    applied: u64,
    closed: bool,
}

impl ThreadView {
    pub fn shared() -> SharedThread {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn next_seq(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the list with the response to fetch `seq`.  Returns whether
    /// the response was applied.
    pub fn apply(&mut self, seq: u64, messages: Vec<ChatMessage>) -> bool {
        if self.closed || seq <= self.applied {
            return false;
        }
        self.applied = seq;
        self.messages = messages;
        true
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// A message as the conversation view shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    pub content: String,
    /// Sent by the local user.
    pub mine: bool,
    pub sent_at: Option<DateTime<Utc>>,
}

pub fn render_messages(messages: &[ChatMessage], own: Option<&UserId>) -> Vec<MessageView> {
    messages
        .iter()
        .map(|m| MessageView {
            id: m.id.clone(),
            content: m.content.clone(),
            mine: own.is_some_and(|own| *own == m.sender_id),
            sent_at: m.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: u64, sender: u64) -> ChatMessage {
        ChatMessage {
            id: MessageId::from(id),
            sender_id: UserId::from(sender),
            content: format!("m{id}"),
            created_at: None,
        }
    }

    #[test]
    fn test_older_response_is_discarded() {
        let mut view = ThreadView::default();
        let slow = view.next_seq();
        let fast = view.next_seq();

        assert!(view.apply(fast, vec![msg(1, 1), msg(2, 2)]));
        assert!(!view.apply(slow, vec![msg(1, 1)]));
        assert_eq!(view.messages().len(), 2);
        assert_eq!(view.last_applied(), fast);
    }

    #[test]
    fn test_closed_view_rejects_everything() {
        let mut view = ThreadView::default();
        let seq = view.next_seq();
        view.close();
        assert!(!view.apply(seq, vec![msg(1, 1)]));
        assert!(view.messages().is_empty());
    }

    #[test]
    fn test_render_marks_own_messages() {
        let me = UserId::from(7);
        let rendered = render_messages(&[msg(1, 7), msg(2, 9)], Some(&me));
        assert!(rendered[0].mine);
        assert!(!rendered[1].mine);

        let anonymous = render_messages(&[msg(1, 7)], None);
        assert!(!anonymous[0].mine);
    }
}
