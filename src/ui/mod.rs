//! Terminal output helpers.
//!
//! - [`Streams`] bundles the process's stdio so commands can be tested
//!   against in-memory buffers
//! - [`StaleguardTheme`] styles human-readable output

pub mod streams;
pub mod theme;

pub use streams::Streams;
pub use theme::{should_use_colors, StaleguardTheme};
