//! # mibridge-adapter-virtual
//!
//! Virtual/demo backend that answers device and speaker commands without any
//! account, for testing and demonstration purposes.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | Virtual Plug | `MiioClient` | Holds `siid-piid` properties; supports reads, `key=#json` writes and `props` |
//! | Kitchen Speaker, 卧室音箱 | `MinaClient` | Listed in that order; record every spoken message |
//!
//! Every client records the calls it receives so tests can assert on what
//! reached the backend. Clients bound to a [`VirtualSession`] fail with
//! `SessionClosed` once it is closed.
//!
//! ## Dependency rule
//!
//! Depends on `mibridge-app` (port traits) and `mibridge-domain` only.

mod plug;
mod session;
mod speaker;

pub use plug::{MiioCall, VirtualMiioClient};
pub use session::VirtualSession;
pub use speaker::{SentMessage, VirtualMinaClient};

/// Build a session and both clients with default devices, bound to that
/// session.
#[must_use]
pub fn connect() -> (VirtualSession, VirtualMiioClient, VirtualMinaClient) {
    let session = VirtualSession::default();
    let miio = VirtualMiioClient::default().bind(&session);
    let mina = VirtualMinaClient::default().bind(&session);
    (session, miio, mina)
}

fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
