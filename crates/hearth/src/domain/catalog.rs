//! Tool Catalog
//!
//! The fixed set of tools offered to the model, and the lookup table that
//! maps each tool name to a Home Assistant service. Resolution is by exact
//! name; tool names are never split to guess a domain.

use crate::domain::entities::{
    ParameterSpec, ParameterType, ServiceInvocation, ToolCall, ToolSpec,
};
use crate::domain::errors::BridgeError;
use crate::domain::value_objects::{ArgumentTransform, ServiceTarget};

/// A catalog row: the tool offered to the model and where it lands
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub spec: ToolSpec,
    pub target: ServiceTarget,
    pub transform: ArgumentTransform,
}

const fn entity_id(description: &'static str) -> ParameterSpec {
    ParameterSpec {
        name: "entity_id",
        kind: ParameterType::String,
        description,
        required: true,
    }
}

/// Built-in device-control tools
pub static BUILTIN_TOOLS: &[CatalogEntry] = &[
    CatalogEntry {
        spec: ToolSpec {
            name: "turn_on_light",
            description: "Turns on a specific light in Home Assistant.",
            parameters: &[entity_id(
                "The entity ID of the light to turn on (e.g., light.kitchen_lights).",
            )],
        },
        target: ServiceTarget::new("light", "turn_on"),
        transform: ArgumentTransform::Passthrough,
    },
    CatalogEntry {
        spec: ToolSpec {
            name: "turn_off_light",
            description: "Turns off a specific light in Home Assistant.",
            parameters: &[entity_id(
                "The entity ID of the light to turn off (e.g., light.kitchen_lights).",
            )],
        },
        target: ServiceTarget::new("light", "turn_off"),
        transform: ArgumentTransform::Passthrough,
    },
    CatalogEntry {
        spec: ToolSpec {
            name: "set_light_brightness",
            description:
                "Sets the brightness of a light. The brightness value is a number between 0 and 100.",
            parameters: &[
                entity_id("The entity ID of the light to adjust."),
                ParameterSpec {
                    name: "brightness",
                    kind: ParameterType::Integer,
                    description: "The brightness level as a percentage (0-100).",
                    required: true,
                },
            ],
        },
        target: ServiceTarget::new("light", "turn_on"),
        transform: ArgumentTransform::BrightnessPercent,
    },
    CatalogEntry {
        spec: ToolSpec {
            name: "turn_on_switch",
            description: "Turns on a switch (plug, relay, fan switch) in Home Assistant.",
            parameters: &[entity_id(
                "The entity ID of the switch to turn on (e.g., switch.coffee_maker).",
            )],
        },
        target: ServiceTarget::new("switch", "turn_on"),
        transform: ArgumentTransform::Passthrough,
    },
    CatalogEntry {
        spec: ToolSpec {
            name: "turn_off_switch",
            description: "Turns off a switch (plug, relay, fan switch) in Home Assistant.",
            parameters: &[entity_id(
                "The entity ID of the switch to turn off (e.g., switch.coffee_maker).",
            )],
        },
        target: ServiceTarget::new("switch", "turn_off"),
        transform: ArgumentTransform::Passthrough,
    },
];

/// Lookup over a static set of catalog entries
#[derive(Debug, Clone, Copy)]
pub struct ToolCatalog {
    entries: &'static [CatalogEntry],
}

impl ToolCatalog {
    pub const fn new(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    pub const fn builtin() -> Self {
        Self::new(BUILTIN_TOOLS)
    }

    /// Tool definitions, in catalog order
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.entries.iter().map(|entry| entry.spec).collect()
    }

    pub fn lookup(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.spec.name == name)
    }

    /// Turn a tool call into the Home Assistant service call it stands for
    pub fn resolve(&self, call: &ToolCall) -> Result<ServiceInvocation, BridgeError> {
        let entry = self
            .lookup(call.name())
            .ok_or_else(|| BridgeError::UnknownTool(call.name().to_string()))?;

        let arguments = call.parse_arguments()?;
        entry.spec.validate(&arguments)?;
        let data = entry.transform.apply(entry.spec.name, arguments)?;

        Ok(ServiceInvocation::new(entry.spec.name, entry.target, data))
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
