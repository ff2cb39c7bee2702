//! Text measuring and wrapping helpers.
//!
//! - [`visual_width`], [`window_around`] - unicode-aware widths
//! - [`wrap_text`] - wrapping message text into bubble lines

mod width;
mod wrap;

pub use width::{visual_width, window_around};
pub use wrap::wrap_text;
