//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod argument_transform;
mod message_role;
mod service_target;

pub use argument_transform::*;
pub use message_role::*;
pub use service_target::*;
