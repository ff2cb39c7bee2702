//! The conversation view-model.
//!
//! All state behind the chat page lives in [`Conversation`]: the ordered
//! message list and the input buffer. Every interaction is an [`Event`]
//! fed to [`Conversation::update`], which mutates the state and returns
//! the [`Effect`]s the host has to carry out (start a reply timer, scroll
//! the list). The view-model itself never sleeps or spawns.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Config;
use crate::input::{InputBuffer, InputEdit};
use crate::message::{Message, MessageId};
use crate::reply::render_reply;

/// A bot reply computed at send time, waiting for its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub id: MessageId,
    pub text: String,
}

/// Keys the view-model reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// A key press with its shift state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }
}

/// Input to [`Conversation::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Edit the input buffer.
    Input(InputEdit),
    /// Send the current input buffer.
    Submit,
    /// A key press; Enter without shift submits.
    KeyPress(KeyPress),
    /// A scheduled reply's timer fired.
    ReplyDue(PendingReply),
}

/// Work the host must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append `reply` once `delay` has elapsed.
    ScheduleReply { reply: PendingReply, delay: Duration },
    /// Bring the newest message into view.
    ScrollToBottom,
}

/// Message list plus input buffer.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    input: InputBuffer,
    reply_template: String,
    reply_delay: Duration,
}

impl Conversation {
    /// Create a conversation seeded with the greeting as message #1.
    pub fn new(config: &Config) -> Self {
        Self {
            messages: vec![Message::bot(1, config.greeting.clone())],
            input: InputBuffer::new(),
            reply_template: config.reply_template.clone(),
            reply_delay: config.reply_delay(),
        }
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.input.is_blank()
    }

    /// Apply one event and return the resulting effects.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Input(edit) => {
                self.input.apply(edit);
                Vec::new()
            }
            Event::Submit => self.submit(),
            Event::KeyPress(key) => self.handle_key(key),
            Event::ReplyDue(reply) => self.apply_reply(reply),
        }
    }

    /// Send `text` as a user message.
    ///
    /// Blank text is ignored. Otherwise the user message gets id `len + 1`
    /// and the reply is scheduled with id `len + 2`, where `len` is the
    /// list length right now. Overlapping sends can therefore produce
    /// replies sharing an id.
    pub fn send(&mut self, text: &str) -> Vec<Effect> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let len = self.messages.len() as MessageId;
        self.messages.push(Message::user(len + 1, text));
        self.input.clear();
        debug!(id = len + 1, "user message appended");

        let reply = PendingReply {
            id: len + 2,
            text: render_reply(&self.reply_template, text),
        };
        vec![
            Effect::ScrollToBottom,
            Effect::ScheduleReply {
                reply,
                delay: self.reply_delay,
            },
        ]
    }

    /// Send whatever is in the input buffer.
    pub fn submit(&mut self) -> Vec<Effect> {
        let text = self.input.content().to_string();
        self.send(&text)
    }

    /// Enter without shift submits; everything else is ignored.
    pub fn handle_key(&mut self, key: KeyPress) -> Vec<Effect> {
        match key {
            KeyPress {
                key: Key::Enter,
                shift: false,
            } => self.submit(),
            _ => Vec::new(),
        }
    }

    /// Append a reply whose timer fired.
    pub fn apply_reply(&mut self, reply: PendingReply) -> Vec<Effect> {
        if self.messages.iter().any(|m| m.id == reply.id) {
            warn!(id = reply.id, "reply id collides with an existing message");
        }
        debug!(id = reply.id, "bot reply appended");
        self.messages.push(Message::bot(reply.id, reply.text));
        vec![Effect::ScrollToBottom]
    }
}
