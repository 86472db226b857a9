//! Domain Layer
//!
//! Request-scoped entities, value objects, the tool catalog and errors.
//! Nothing here performs I/O.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{CatalogEntry, ToolCatalog, BUILTIN_TOOLS};
pub use entities::*;
pub use errors::BridgeError;
pub use value_objects::*;
