//! Request context carrying the authenticated caller.

use uuid::Uuid;

/// Who is acting on this request.
///
/// Built by the HTTP layer from a verified token and passed explicitly into
/// every service method. `user_id` is the owner scope for all folder reads
/// and writes; no operation sees another user's folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: Uuid,
    /// Client address as reported by the proxy, for logs.
    pub ip_address: String,
}

impl RequestContext {
    pub fn new(user_id: Uuid, ip_address: impl Into<String>) -> Self {
        Self {
            user_id,
            ip_address: ip_address.into(),
        }
    }

    /// A context with no known client address, as used by tooling and tests.
    pub fn for_user(user_id: Uuid) -> Self {
        Self::new(user_id, "unknown")
    }
}
