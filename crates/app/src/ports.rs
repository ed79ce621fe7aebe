//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the external
//! account/service library. They are defined here (in `app`) so that both the
//! use-case layer and the adapter layer can depend on them without creating
//! circular dependencies.

pub mod miio;
pub mod mina;
pub mod session;

pub use miio::MiioClient;
pub use mina::MinaClient;
pub use session::NetworkSession;
