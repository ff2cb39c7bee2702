//! A conversation bound to its reply timers.
//!
//! [`Session`] is the lifetime scope of the chat page: it owns the
//! [`Conversation`], carries out [`Effect::ScheduleReply`] with a
//! [`ReplyScheduler`], and cancels every timer when it ends.

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::Config;
use crate::conversation::{Conversation, Effect, Event, KeyPress, PendingReply};
use crate::input::InputEdit;
use crate::message::Message;
use crate::reply::ReplyScheduler;

/// Conversation plus the timers delivering its replies.
#[derive(Debug)]
pub struct Session {
    conversation: Conversation,
    scheduler: ReplyScheduler,
    replies: mpsc::UnboundedReceiver<PendingReply>,
}

impl Session {
    /// Create a session. Scheduling replies requires a tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (scheduler, replies) = ReplyScheduler::new();
        Self {
            conversation: Conversation::new(config),
            scheduler,
            replies,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// Feed an event to the view-model and start any timers it asks for.
    ///
    /// All effects are returned, including the scheduled replies, so the
    /// caller can react to [`Effect::ScrollToBottom`].
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let effects = self.conversation.update(event);
        self.start_timers(effects)
    }

    pub fn edit(&mut self, edit: InputEdit) -> Vec<Effect> {
        self.dispatch(Event::Input(edit))
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        self.dispatch(Event::Submit)
    }

    pub fn handle_key(&mut self, key: KeyPress) -> Vec<Effect> {
        self.dispatch(Event::KeyPress(key))
    }

    /// Send `text` directly, bypassing the input buffer.
    pub fn send(&mut self, text: &str) -> Vec<Effect> {
        let effects = self.conversation.send(text);
        self.start_timers(effects)
    }

    /// Wait for the next fired reply without applying it.
    ///
    /// Cancel safe, for use in `tokio::select!`.
    pub async fn recv_reply(&mut self) -> Option<PendingReply> {
        self.replies.recv().await
    }

    /// Wait for the next reply and append it.
    pub async fn next_reply(&mut self) -> Option<Vec<Effect>> {
        let reply = self.replies.recv().await?;
        Some(self.dispatch(Event::ReplyDue(reply)))
    }

    /// Number of replies whose timers have not fired yet.
    pub fn pending_replies(&mut self) -> usize {
        self.scheduler.pending()
    }

    /// Wait until every scheduled reply has been appended.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(reply) = self.replies.try_recv() {
                self.dispatch(Event::ReplyDue(reply));
            }
            if self.scheduler.pending() == 0 {
                // A timer that finished has already sent; drain once more.
                while let Ok(reply) = self.replies.try_recv() {
                    self.dispatch(Event::ReplyDue(reply));
                }
                return;
            }
            if let Some(reply) = self.replies.recv().await {
                self.dispatch(Event::ReplyDue(reply));
            }
        }
    }

    fn start_timers(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        for effect in &effects {
            if let Effect::ScheduleReply { reply, delay } = effect {
                self.scheduler.schedule(reply.clone(), *delay);
            }
        }
        effects
    }

    /// Cancel pending replies and stop accepting new ones.
    ///
    /// Returns how many timers were cancelled. Replies that already fired
    /// but were not received are discarded.
    pub fn close(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        self.replies.close();
        while self.replies.try_recv().is_ok() {}
        cancelled
    }

    /// End the session, cancelling pending replies, and return the transcript.
    pub fn shutdown(mut self) -> Vec<Message> {
        let cancelled = self.close();
        debug!(cancelled, "session shut down");
        self.conversation.messages().to_vec()
    }
}
