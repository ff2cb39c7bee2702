//! Synthesized replies and the timers that deliver them.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::MESSAGE_PLACEHOLDER;
use crate::conversation::PendingReply;

/// Fill the reply template with the user's text.
pub fn render_reply(template: &str, text: &str) -> String {
    template.replace(MESSAGE_PLACEHOLDER, text)
}

/// Handle for cancelling a single scheduled reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Runs one tokio timer per scheduled reply.
///
/// Fired replies are delivered on the receiver returned by
/// [`ReplyScheduler::new`]. Outstanding timers are aborted when the
/// scheduler is dropped, so nothing is delivered after its owner is gone.
#[derive(Debug)]
pub struct ReplyScheduler {
    tx: mpsc::UnboundedSender<PendingReply>,
    timers: Vec<(TimerId, JoinHandle<()>)>,
    next_id: u64,
}

impl ReplyScheduler {
    /// Create a scheduler and the channel its replies arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            timers: Vec::new(),
            next_id: 0,
        };
        (scheduler, rx)
    }

    /// Start a timer delivering `reply` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, reply: PendingReply, delay: Duration) -> TimerId {
        self.prune();

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply_id = reply.id;
            if tx.send(reply).is_err() {
                warn!(id = reply_id, "reply dropped, receiver closed");
            }
        });
        debug!(timer = id.0, ?delay, "reply scheduled");
        self.timers.push((id, handle));
        id
    }

    /// Cancel one timer. Returns false if it already fired or is unknown.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.prune();
        match self.timers.iter().position(|(t, _)| *t == id) {
            Some(idx) => {
                let (_, handle) = self.timers.remove(idx);
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Cancel every outstanding timer, returning how many were aborted.
    pub fn cancel_all(&mut self) -> usize {
        self.prune();
        let count = self.timers.len();
        for (_, handle) in self.timers.drain(..) {
            handle.abort();
        }
        if count > 0 {
            debug!(count, "reply timers cancelled");
        }
        count
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&mut self) -> usize {
        self.prune();
        self.timers.len()
    }

    fn prune(&mut self) {
        self.timers.retain(|(_, handle)| !handle.is_finished());
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(id: u64, text: &str) -> PendingReply {
        PendingReply {
            id,
            text: text.into(),
        }
    }

    #[test]
    fn test_render_reply() {
        let template = "I received your message: \"{message}\". This is a demo response.";
        assert_eq!(
            render_reply(template, "hi"),
            "I received your message: \"hi\". This is a demo response."
        );
    }

    #[test]
    fn test_render_reply_does_not_expand_user_text() {
        assert_eq!(render_reply("> {message}", "{message}"), "> {message}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_delivered_after_delay() {
        let (mut scheduler, mut rx) = ReplyScheduler::new();
        scheduler.schedule(reply(3, "pong"), Duration::from_millis(1000));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        let got = rx.recv().await.unwrap();
        assert_eq!(got, reply(3, "pong"));
        tokio::task::yield_now().await;
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_arrive_in_delay_order() {
        let (mut scheduler, mut rx) = ReplyScheduler::new();
        scheduler.schedule(reply(1, "slow"), Duration::from_millis(500));
        scheduler.schedule(reply(2, "fast"), Duration::from_millis(100));

        assert_eq!(rx.recv().await.unwrap().text, "fast");
        assert_eq!(rx.recv().await.unwrap().text, "slow");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_single_timer() {
        let (mut scheduler, mut rx) = ReplyScheduler::new();
        let first = scheduler.schedule(reply(1, "cancelled"), Duration::from_millis(100));
        scheduler.schedule(reply(2, "kept"), Duration::from_millis(200));

        assert!(scheduler.cancel(first));
        assert!(!scheduler.cancel(first));
        assert_eq!(rx.recv().await.unwrap().text, "kept");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_outstanding_timers() {
        let (mut scheduler, mut rx) = ReplyScheduler::new();
        scheduler.schedule(reply(1, "never"), Duration::from_millis(100));
        assert_eq!(scheduler.pending(), 1);
        drop(scheduler);

        tokio::time::sleep(Duration::from_secs(1)).await;
        // Sender side is gone, and nothing was sent before it went.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_counts() {
        let (mut scheduler, _rx) = ReplyScheduler::new();
        scheduler.schedule(reply(1, "a"), Duration::from_millis(100));
        scheduler.schedule(reply(2, "b"), Duration::from_millis(100));
        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.pending(), 0);
    }
}
