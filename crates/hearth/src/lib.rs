//! Hearth Domain Library
//!
//! Core types and interfaces for the Hearth bridge, which lets a
//! conversation agent use a hosted LLM whose tool calls are executed as
//! Home Assistant service calls.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request-scoped entities and the tool catalog
//!   - `entities/`: ChatRequest, ToolSpec, ToolCall, ServiceInvocation, ChatResponse
//!   - `value_objects/`: MessageRole, ServiceTarget, ArgumentTransform
//!   - `catalog`: fixed tool catalog and the tool name → service lookup table
//!   - `errors`: the bridge error taxonomy
//!
//! - **Ports** (`ports/`): abstract interfaces to the two gateways
//!   - `LlmGateway`: the language-model workspace chat endpoint
//!   - `HomeAutomation`: the Home Assistant service API
//!
//! # Usage
//!
//! ```rust,ignore
//! use hearth::{ChatRequest, ToolCatalog};
//!
//! let request = ChatRequest::from_slice(body)?;
//! let utterance = request.last_user_input()?;
//! let invocation = ToolCatalog::builtin().resolve(&tool_call)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ArgumentTransform, BridgeError, CatalogEntry, ChatRequest, ChatResponse, ContentPart,
    FunctionCall, Message, MessageContent, MessageRole, ParameterSpec, ParameterType,
    ServiceInvocation, ServiceTarget, ToolCall, ToolCatalog, ToolSpec, BUILTIN_TOOLS,
    CONFIRMATION_TEXT, FALLBACK_TEXT,
};
pub use ports::{AssistantMessage, ChatMessage, HomeAutomation, LlmGateway, LlmRequest};
