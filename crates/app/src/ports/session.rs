//! Session port — the long-lived connection shared by both clients.

use std::future::Future;

use mibridge_domain::error::BridgeError;

/// The shared session opened at startup.
pub trait NetworkSession: Send + Sync {
    /// Release the session. Calls issued afterwards fail with
    /// [`BridgeError::SessionClosed`].
    fn close(&self) -> impl Future<Output = Result<(), BridgeError>> + Send;
}
