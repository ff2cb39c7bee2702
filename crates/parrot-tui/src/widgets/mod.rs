//! Widgets that make up the chat page.
//!
//! - [`Header`] - title band
//! - [`MessageList`] - scrollable bubbles
//! - [`InputBar`] - text entry and send button

mod header;
mod input_bar;
mod message_list;

pub use header::{Header, HEADER_HEIGHT};
pub use input_bar::{InputBar, INPUT_HEIGHT};
pub use message_list::{MessageList, MessageListState};
