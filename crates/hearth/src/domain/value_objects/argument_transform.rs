//! ArgumentTransform - Tool arguments → Home Assistant service data

use serde_json::{Map, Value};

use crate::domain::errors::BridgeError;

/// How a tool's arguments are rewritten before they are sent to Home
/// Assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentTransform {
    /// Arguments are already keyed the way the service expects
    Passthrough,
    /// `brightness` as a 0-100 percentage becomes `brightness_pct`.
    /// Home Assistant's plain `brightness` field is on a 0-255 scale.
    BrightnessPercent,
}

impl ArgumentTransform {
    pub fn apply(
        &self,
        tool: &str,
        arguments: Map<String, Value>,
    ) -> Result<Map<String, Value>, BridgeError> {
        match self {
            ArgumentTransform::Passthrough => Ok(arguments),
            ArgumentTransform::BrightnessPercent => brightness_percent(tool, arguments),
        }
    }
}

fn brightness_percent(
    tool: &str,
    mut arguments: Map<String, Value>,
) -> Result<Map<String, Value>, BridgeError> {
    let raw = arguments
        .remove("brightness")
        .ok_or_else(|| BridgeError::tool_argument(tool, "missing required argument: brightness"))?;

    let value = match &raw {
        Value::Number(n) => n.as_f64(),
        // Some models quote numbers or append a percent sign
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| {
        BridgeError::tool_argument(tool, format!("brightness is not a number: {}", raw))
    })?;

    let percent = value.round().clamp(0.0, 100.0) as u8;
    if f64::from(percent) != value {
        tracing::debug!("Brightness {} adjusted to {}%", value, percent);
    }

    arguments.insert("brightness_pct".to_string(), Value::from(percent));
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_passthrough_keeps_arguments() {
        let input = args(json!({"entity_id": "light.kitchen_lights"}));
        let output = ArgumentTransform::Passthrough
            .apply("turn_on_light", input.clone())
            .unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_brightness_renamed_to_percent_field() {
        let output = ArgumentTransform::BrightnessPercent
            .apply(
                "set_light_brightness",
                args(json!({"entity_id": "light.kitchen_lights", "brightness": 50})),
            )
            .unwrap();

        assert_eq!(
            Value::Object(output),
            json!({"entity_id": "light.kitchen_lights", "brightness_pct": 50})
        );
    }

    #[test]
    fn test_brightness_clamped_and_rounded() {
        let high = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"brightness": 150})))
            .unwrap();
        assert_eq!(high["brightness_pct"], json!(100));

        let low = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"brightness": -5})))
            .unwrap();
        assert_eq!(low["brightness_pct"], json!(0));

        let fractional = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"brightness": 42.6})))
            .unwrap();
        assert_eq!(fractional["brightness_pct"], json!(43));
    }

    #[test]
    fn test_brightness_accepts_numeric_string() {
        let output = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"brightness": " 75% "})))
            .unwrap();
        assert_eq!(output["brightness_pct"], json!(75));
        assert!(!output.contains_key("brightness"));
    }

    #[test]
    fn test_brightness_rejects_non_numeric() {
        let err = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"brightness": "bright"})))
            .unwrap_err();
        assert!(matches!(err, BridgeError::ToolArgument { .. }));

        let err = ArgumentTransform::BrightnessPercent
            .apply("set_light_brightness", args(json!({"entity_id": "light.desk"})))
            .unwrap_err();
        assert!(matches!(err, BridgeError::ToolArgument { .. }));
    }
}
