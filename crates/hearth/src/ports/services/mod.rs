//! Service Ports
//!
//! Abstract interfaces for external services.

mod home_automation;
mod llm_gateway;

pub use home_automation::*;
pub use llm_gateway::*;
