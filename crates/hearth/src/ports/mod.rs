//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the translator talks to the two
//! gateways it sits between.
//!
//! Implementations of these traits live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
