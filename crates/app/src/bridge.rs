//! Process-wide session state.
//!
//! A [`Bridge`] is built once at startup from an opened session and the two
//! clients created on top of it. Handlers share its services through `Arc`
//! and never build their own. [`Bridge::shutdown`] consumes the bridge, so the
//! session is released exactly once.

use std::sync::Arc;

use mibridge_domain::command::DeviceId;
use mibridge_domain::error::BridgeError;

use crate::ports::{MiioClient, MinaClient, NetworkSession};
use crate::services::miio_service::MiioCommandService;
use crate::services::mina_service::MinaCommandService;

/// Session, clients and default device for the lifetime of the process.
pub struct Bridge<S, M, N> {
    session: S,
    miio: Arc<MiioCommandService<M>>,
    mina: Arc<MinaCommandService<N>>,
}

impl<S, M, N> Bridge<S, M, N>
where
    S: NetworkSession,
    M: MiioClient,
    N: MinaClient,
{
    /// Assemble the process state around an already opened `session`.
    pub fn new(session: S, miio: M, mina: N, default_did: Option<DeviceId>) -> Self {
        Self {
            session,
            miio: Arc::new(MiioCommandService::new(miio, default_did)),
            mina: Arc::new(MinaCommandService::new(mina)),
        }
    }

    /// Shared handle to the device command service.
    #[must_use]
    pub fn miio(&self) -> Arc<MiioCommandService<M>> {
        Arc::clone(&self.miio)
    }

    /// Shared handle to the voice command service.
    #[must_use]
    pub fn mina(&self) -> Arc<MinaCommandService<N>> {
        Arc::clone(&self.mina)
    }

    /// Release the session.
    ///
    /// In-flight requests still holding a service handle are not drained;
    /// their external calls fail once the session is gone.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the session adapter.
    pub async fn shutdown(self) -> Result<(), BridgeError> {
        tracing::info!("closing session");
        self.session.close().await
    }
}
