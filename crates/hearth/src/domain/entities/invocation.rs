//! ServiceInvocation - A resolved Home Assistant service call

use serde_json::{Map, Value};

use crate::domain::value_objects::ServiceTarget;

/// A concrete Home Assistant service call derived from a tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInvocation {
    pub tool: String,
    pub target: ServiceTarget,
    /// Service data, keyed the way Home Assistant expects (`entity_id`, ...)
    pub data: Map<String, Value>,
}

impl ServiceInvocation {
    pub fn new(tool: impl Into<String>, target: ServiceTarget, data: Map<String, Value>) -> Self {
        Self {
            tool: tool.into(),
            target,
            data,
        }
    }

    /// `entity_id` of the call, when it is a single string
    pub fn entity_id(&self) -> Option<&str> {
        self.data.get("entity_id").and_then(Value::as_str)
    }
}
