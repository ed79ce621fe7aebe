//! Shared application state for axum handlers.

use std::sync::Arc;

use mibridge_app::ports::{MiioClient, MinaClient};
use mibridge_app::services::miio_service::MiioCommandService;
use mibridge_app::services::mina_service::MinaCommandService;

/// Application state shared across all axum handlers.
///
/// Generic over the two client types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the clients themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<M, N> {
    /// Device command service.
    pub miio_service: Arc<MiioCommandService<M>>,
    /// Voice command service.
    pub mina_service: Arc<MinaCommandService<N>>,
}

impl<M, N> Clone for AppState<M, N> {
    fn clone(&self) -> Self {
        Self {
            miio_service: Arc::clone(&self.miio_service),
            mina_service: Arc::clone(&self.mina_service),
        }
    }
}

impl<M, N> AppState<M, N>
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(miio_service: MiioCommandService<M>, mina_service: MinaCommandService<N>) -> Self {
        Self {
            miio_service: Arc::new(miio_service),
            mina_service: Arc::new(mina_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this with the handles of a
    /// [`Bridge`](mibridge_app::bridge::Bridge), which keeps the session
    /// they were built on.
    pub fn from_arcs(
        miio_service: Arc<MiioCommandService<M>>,
        mina_service: Arc<MinaCommandService<N>>,
    ) -> Self {
        Self {
            miio_service,
            mina_service,
        }
    }
}
