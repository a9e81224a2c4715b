//! Badge rendering subsystem.
//!
//! Turns the current view count into a fixed-size SVG badge suitable for
//! embedding in a README. All request-supplied text is XML-escaped before it
//! reaches the markup.

pub mod render;

pub use render::{render_badge, BadgeOptions};
