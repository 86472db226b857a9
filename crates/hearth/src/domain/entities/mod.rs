//! Domain Entities
//!
//! Request-scoped models; none of them outlives a single HTTP exchange.
//! - ChatRequest / Message: inbound OpenAI-style conversation
//! - ChatResponse: the single assistant reply
//! - ToolSpec / ToolCall: tool catalog entries and the model's choice
//! - ServiceInvocation: a resolved Home Assistant service call

mod chat;
mod invocation;
mod tool;

pub use chat::*;
pub use invocation::*;
pub use tool::*;
