//! Virtual session — counts how often it is closed.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mibridge_app::ports::NetworkSession;
use mibridge_domain::error::BridgeError;

/// Session stand-in. Clones share the close counter, and clients bound to
/// it refuse calls once it is closed.
#[derive(Debug, Clone, Default)]
pub struct VirtualSession {
    closed: Arc<AtomicUsize>,
}

impl VirtualSession {
    /// Number of times [`NetworkSession::close`] was called.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    /// Whether the session has been closed at least once.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.close_count() > 0
    }

    /// Fail with [`BridgeError::SessionClosed`] once closed.
    pub(crate) fn ensure_open(&self) -> Result<(), BridgeError> {
        if self.is_closed() {
            Err(BridgeError::SessionClosed)
        } else {
            Ok(())
        }
    }
}

impl NetworkSession for VirtualSession {
    fn close(&self) -> impl Future<Output = Result<(), BridgeError>> + Send {
        let previous = self.closed.fetch_add(1, Ordering::SeqCst);
        async move {
            if previous == 0 {
                Ok(())
            } else {
                Err(BridgeError::SessionClosed)
            }
        }
    }
}
