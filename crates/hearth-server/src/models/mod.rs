//! Hearth Wire Models
//!
//! - Completion: OpenAI-compatible request/response envelopes
//! - Error: `{"error": ...}` body

mod completion;

pub use completion::*;
