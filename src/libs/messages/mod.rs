//! User-facing message catalog.
//!
//! All prompt and status text lives in the [`Message`] enum with a single
//! `Display` implementation, kept separate from the error taxonomy in
//! `libs::error`. The `msg_*` macros route output through tracing when debug
//! mode is active and plain console output otherwise.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
