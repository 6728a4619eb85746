//! Advisory message rendering.

pub mod composer;

pub use composer::{compose, finding_line, ADVISORY_FOOTER, ADVISORY_HEADER};
