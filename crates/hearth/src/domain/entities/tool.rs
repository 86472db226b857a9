//! Tool Entities
//!
//! `ToolSpec` describes a callable action offered to the model;
//! `ToolCall` is the model's decision to use one.

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::domain::errors::BridgeError;

/// JSON Schema type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
        }
    }
}

/// One named parameter of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterType,
    pub description: &'static str,
    pub required: bool,
}

/// A callable tool as offered to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParameterSpec],
}

impl ToolSpec {
    /// OpenAI function-tool definition for this spec
    pub fn definition(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({"type": p.kind.as_str(), "description": p.description}),
                )
            })
            .collect();

        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }

    /// Check the parsed arguments against the declared parameters
    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<(), BridgeError> {
        for param in self.parameters {
            match arguments.get(param.name) {
                None | Some(Value::Null) if param.required => {
                    return Err(BridgeError::tool_argument(
                        self.name,
                        format!("missing required argument: {}", param.name),
                    ));
                }
                Some(value)
                    if param.kind == ParameterType::String
                        && !value.is_string()
                        && !value.is_null() =>
                {
                    return Err(BridgeError::tool_argument(
                        self.name,
                        format!("{} must be a string", param.name),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Serialize for ToolSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.definition().serialize(serializer)
    }
}

/// A tool call emitted by the model
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: Option<String>,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded text per the OpenAI wire format; some gateways send an
    /// object instead, which is accepted as-is.
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: None,
            function: FunctionCall {
                name: name.into(),
                arguments: Value::String(arguments.into()),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Decode the arguments into a mapping
    pub fn parse_arguments(&self) -> Result<Map<String, Value>, BridgeError> {
        let decoded = match &self.function.arguments {
            Value::Null => return Ok(Map::new()),
            Value::String(text) if text.trim().is_empty() => return Ok(Map::new()),
            Value::String(text) => serde_json::from_str::<Value>(text).map_err(|e| {
                BridgeError::tool_argument(self.name(), format!("arguments are not valid JSON: {e}"))
            })?,
            other => other.clone(),
        };

        match decoded {
            Value::Object(map) => Ok(map),
            other => Err(BridgeError::tool_argument(
                self.name(),
                format!("arguments must be a JSON object, got {}", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITY: ParameterSpec = ParameterSpec {
        name: "entity_id",
        kind: ParameterType::String,
        description: "Entity to act on",
        required: true,
    };

    const LEVEL: ParameterSpec = ParameterSpec {
        name: "level",
        kind: ParameterType::Integer,
        description: "Level",
        required: false,
    };

    const SPEC: ToolSpec = ToolSpec {
        name: "turn_on_fan",
        description: "Turns on a fan.",
        parameters: &[ENTITY, LEVEL],
    };

    #[test]
    fn test_definition_shape() {
        let value = serde_json::to_value(SPEC).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "function",
                "function": {
                    "name": "turn_on_fan",
                    "description": "Turns on a fan.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "entity_id": {"type": "string", "description": "Entity to act on"},
                            "level": {"type": "integer", "description": "Level"}
                        },
                        "required": ["entity_id"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_validate_required_and_types() {
        let ok = json!({"entity_id": "fan.bedroom"});
        assert!(SPEC.validate(ok.as_object().unwrap()).is_ok());

        let missing = json!({"level": 2});
        assert!(SPEC.validate(missing.as_object().unwrap()).is_err());

        let null = json!({"entity_id": null});
        assert!(SPEC.validate(null.as_object().unwrap()).is_err());

        let wrong_type = json!({"entity_id": 42});
        assert!(SPEC.validate(wrong_type.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_parse_text_arguments() {
        let call = ToolCall::new("turn_on_light", r#"{"entity_id": "light.kitchen_lights"}"#);
        let args = call.parse_arguments().unwrap();
        assert_eq!(args["entity_id"], json!("light.kitchen_lights"));
    }

    #[test]
    fn test_parse_object_and_empty_arguments() {
        let call: ToolCall = serde_json::from_value(json!({
            "id": "call_1",
            "function": {"name": "turn_on_light", "arguments": {"entity_id": "light.porch"}}
        }))
        .unwrap();
        assert_eq!(call.parse_arguments().unwrap()["entity_id"], json!("light.porch"));

        let no_args: ToolCall =
            serde_json::from_value(json!({"function": {"name": "turn_on_light"}})).unwrap();
        assert!(no_args.parse_arguments().unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_arguments() {
        let bad_json = ToolCall::new("turn_on_light", "{entity_id: light.porch");
        assert!(matches!(
            bad_json.parse_arguments(),
            Err(BridgeError::ToolArgument { .. })
        ));

        let not_object = ToolCall::new("turn_on_light", "[\"light.porch\"]");
        assert!(matches!(
            not_object.parse_arguments(),
            Err(BridgeError::ToolArgument { .. })
        ));
    }
}
