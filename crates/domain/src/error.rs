//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BridgeError`]
//! at port boundaries.

/// Reasons a command is rejected before any external call is attempted.
///
/// The display strings are part of the HTTP contract: they are returned
/// verbatim in the `error` field of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `command` field is absent or empty.
    #[error("command is required")]
    MissingCommand,

    /// Neither the request nor the configuration provide a device id.
    #[error("device id (mi_did) is required")]
    MissingDeviceId,
}

/// Base error type crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure reported by the external account/service library.
    ///
    /// Displays as the inner error text, which is what callers receive.
    #[error("{0}")]
    External(Box<dyn std::error::Error + Send + Sync>),

    /// The shared session has already been released.
    #[error("session closed")]
    SessionClosed,
}

impl BridgeError {
    /// Wrap any adapter error as an external failure.
    pub fn external<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::External(Box::new(err))
    }
}
