//! Project-name prompt adapters.
//!
//! The styled terminal prompt lives in the CLI crate behind its
//! `interactive` feature; this one works over any line-oriented stream.

mod line;

pub use line::LinePrompt;
