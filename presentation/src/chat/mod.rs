//! Interactive chat module
//!
//! Provides a line-editor chat interface over a triage session.

mod repl;

pub use repl::ChatRepl;
