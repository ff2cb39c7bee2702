//! parrot-engine: Headless view-model for the parrot demo chat page
//!
//! This crate holds everything behind the page that is not drawing:
//! - Message list and input buffer ([`Conversation`])
//! - Event/effect update function
//! - Templated replies delivered by cancellable timers
//! - Lifetime-scoped [`Session`] tying the two together
//! - Configuration

pub mod config;
pub mod conversation;
pub mod input;
pub mod message;
pub mod reply;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName};
pub use conversation::{Conversation, Effect, Event, Key, KeyPress, PendingReply};
pub use input::{InputBuffer, InputEdit};
pub use message::{Message, MessageId, Sender};
pub use reply::{render_reply, ReplyScheduler, TimerId};
pub use session::Session;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
