//! Customer identity resolution.

use mockall::automock;
use serde::Serialize;

/// Customer details attached to outgoing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerIdentity {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Delivery address.
    pub address: String,
}

/// Source of the customer identity attached to outgoing orders.
///
/// Identity collection is outside the storefront's scope, so the session
/// depends on this seam rather than on hard-coded fields; a real profile
/// source can replace [`PlaceholderIdentity`] without touching checkout.
#[automock]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the customer placing orders in this session.
    fn customer(&self) -> CustomerIdentity;
}

/// Fixed guest profile used while no identity step exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderIdentity;

impl IdentityProvider for PlaceholderIdentity {
    fn customer(&self) -> CustomerIdentity {
        CustomerIdentity {
            name: "Guest Customer".to_string(),
            email: "guest@tienda.local".to_string(),
            address: "1 Placeholder Way".to_string(),
        }
    }
}
