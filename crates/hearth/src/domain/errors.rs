//! Domain Errors
//!
//! Error taxonomy for a single bridged chat request. Every variant is
//! terminal for the request it occurred in.

use thiserror::Error;

/// Bridge errors
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("No user message found")]
    NoUserInput,

    #[error("LLM gateway error: {0}")]
    UpstreamLlm(String),

    #[error("Home Assistant service call failed: {0}")]
    UpstreamAction(String),

    #[error("Invalid arguments for tool {tool}: {reason}")]
    ToolArgument { tool: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BridgeError {
    pub fn tool_argument<T: AsRef<str>>(tool: T, reason: impl Into<String>) -> Self {
        Self::ToolArgument {
            tool: tool.as_ref().to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller is at fault (reported as 400 rather than 500)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedRequest(_) | Self::NoUserInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(BridgeError::NoUserInput.is_client_error());
        assert!(BridgeError::MalformedRequest("eof".into()).is_client_error());
        assert!(!BridgeError::UpstreamLlm("502".into()).is_client_error());
        assert!(!BridgeError::tool_argument("turn_on_light", "bad json").is_client_error());
        assert!(!BridgeError::UnknownTool("open_garage".into()).is_client_error());
    }

    #[test]
    fn test_tool_argument_message() {
        let err = BridgeError::tool_argument("set_light_brightness", "brightness is not a number");
        assert_eq!(
            err.to_string(),
            "Invalid arguments for tool set_light_brightness: brightness is not a number"
        );
    }
}
