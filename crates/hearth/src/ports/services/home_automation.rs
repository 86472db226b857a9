//! Home Automation Port
//!
//! Abstract interface for invoking Home Assistant services.

use async_trait::async_trait;

use crate::domain::entities::ServiceInvocation;
use crate::domain::errors::BridgeError;

/// Service interface for the home-automation gateway
#[async_trait]
pub trait HomeAutomation: Send + Sync {
    /// Invoke a service. Only success matters; the response body is not
    /// relayed to the caller.
    async fn call_service(&self, invocation: &ServiceInvocation) -> Result<(), BridgeError>;
}
