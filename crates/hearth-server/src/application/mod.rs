//! Application Layer (Use Cases)
//!
//! Orchestrates one bridged chat request across the LLM gateway and
//! Home Assistant.

mod translator;

pub use translator::Translator;
