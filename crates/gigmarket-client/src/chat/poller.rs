//! Periodic refresh of a located thread.
//!
//! Ticks are not serialized: a slow fetch does not hold back the next one.
//! Ordering is restored by the sequence numbers in
//! [`ThreadView`](super::thread::ThreadView).

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use gigmarket_api::ChatApi;
use gigmarket_shared::types::ChatId;

use crate::events::{ClientEvent, EventSink, MessagesPayload, PollFailedPayload};

use super::thread::SharedThread;

pub struct MessagePoller {
    chat_id: ChatId,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl MessagePoller {
    /// Spawn the poll loop.  The first fetch happens one full `period` from
    /// now.
    pub fn start<B>(
        backend: Arc<B>,
        chat_id: ChatId,
        thread: SharedThread,
        period: Duration,
        events: EventSink,
    ) -> Self
    where
        B: ChatApi + ?Sized + 'static,
    {
        let cancel = CancellationToken::new();
        let first_tick = Instant::now() + period;
        let task = tokio::spawn(run(
            backend,
            chat_id.clone(),
            thread,
            first_tick,
            period,
            events,
            cancel.clone(),
        ));

        info!(chat = %chat_id, period_ms = period.as_millis() as u64, "Message poller started");
        Self {
            chat_id,
            cancel,
            task: Some(task),
        }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    /// Cancel the timer and every in-flight fetch, then wait for the loop
    /// to exit.
    pub async fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(chat = %self.chat_id, error = %e, "Poll loop ended abnormally");
            }
        }
    }
}

impl Drop for MessagePoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run<B>(
    backend: Arc<B>,
    chat_id: ChatId,
    thread: SharedThread,
    first_tick: Instant,
    period: Duration,
    events: EventSink,
    cancel: CancellationToken,
) where
    B: ChatApi + ?Sized + 'static,
{
    let mut ticker = time::interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,

            _ = ticker.tick() => {
                let seq = thread.lock().await.next_seq();
                debug!(chat = %chat_id, seq, "Polling messages");

                let backend = backend.clone();
                let chat_id = chat_id.clone();
                let thread = thread.clone();
                let events = events.clone();
                in_flight.spawn(async move {
                    fetch_and_apply(&*backend, &chat_id, &thread, seq, &events).await;
                });
            }

            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined {
                    if e.is_panic() {
                        warn!(chat = %chat_id, error = %e, "Poll task panicked");
                    }
                }
            }
        }
    }

    in_flight.abort_all();
    while in_flight.join_next().await.is_some() {}
    info!(chat = %chat_id, "Message poller stopped");
}

/// Fetch the thread and apply the result if `seq` is still the newest.
/// Failures are logged and reported as an event; the caller carries on.
pub(crate) async fn fetch_and_apply<B>(
    backend: &B,
    chat_id: &ChatId,
    thread: &SharedThread,
    seq: u64,
    events: &EventSink,
) -> bool
where
    B: ChatApi + ?Sized,
{
    match backend.chat_messages(chat_id).await {
        Ok(messages) => {
            let mut view = thread.lock().await;
            if !view.apply(seq, messages) {
                debug!(
                    chat = %chat_id,
                    seq,
                    latest = view.last_applied(),
                    closed = view.is_closed(),
                    "Discarding poll response"
                );
                return false;
            }
            events.emit(ClientEvent::MessagesUpdated(MessagesPayload {
                chat_id: chat_id.clone(),
                seq,
                messages: view.messages().to_vec(),
            }));
            true
        }
        Err(e) => {
            warn!(chat = %chat_id, seq, error = %e, "Message poll failed");
            events.emit(ClientEvent::PollFailed(PollFailedPayload {
                chat_id: chat_id.clone(),
                seq,
                error: e.to_string(),
            }));
            false
        }
    }
}
