//! ServiceTarget - Home Assistant `domain.service` pair

use serde::Serialize;

/// The two-part identifier Home Assistant uses for an invocable action,
/// e.g. domain `light`, service `turn_on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceTarget {
    pub domain: &'static str,
    pub service: &'static str,
}

impl ServiceTarget {
    pub const fn new(domain: &'static str, service: &'static str) -> Self {
        Self { domain, service }
    }

    /// Path relative to the Home Assistant API root
    pub fn path(&self) -> String {
        format!("services/{}/{}", self.domain, self.service)
    }
}

impl std::fmt::Display for ServiceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)
    }
}
