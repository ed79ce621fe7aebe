//! # mibridge-adapter-micli
//!
//! Production adapter — reaches the vendor account/service library through
//! its `micli` command-line front end.
//!
//! ## How calls map onto `micli`
//!
//! | Port call | Invocation | Output |
//! |-----------|------------|--------|
//! | `MiioClient::execute` | `micli <command>` with `MI_DID` set | result text |
//! | `MiioClient::help` | `micli help` | help text |
//! | `MinaClient::device_list` | `micli mina` | JSON device list |
//! | `MinaClient::send_message` | `micli mina<message>` | JSON device list |
//!
//! Device commands starting with `mina` or `-v` are refused: micli would run
//! them in speaker mode or read them as its verbosity flag.
//!
//! micli prints the device list after speaking and drops the vendor's own
//! send status, so `send_message` reports `true` whenever micli printed a
//! device list. A failure raised by the vendor library is printed instead of
//! the list and surfaces as an error carrying that text.
//!
//! Credentials travel in the child's environment (`MI_USER`, `MI_PASS`). The
//! tool authenticates on its own and caches its login token in the
//! [`MiAccount`] token file; this crate never reads or writes that file.
//!
//! ## Dependency rule
//!
//! Depends on `mibridge-app` (port traits) and `mibridge-domain` only.

mod account;
mod config;
mod error;
mod miio;
mod mina;
mod session;

pub use account::MiAccount;
pub use config::MicliConfig;
pub use error::MicliError;
pub use miio::MicliMiioClient;
pub use mina::MicliMinaClient;
pub use session::MicliSession;

/// Open one session and build both clients on top of it.
#[must_use]
pub fn connect(
    config: &MicliConfig,
    account: MiAccount,
) -> (MicliSession, MicliMiioClient, MicliMinaClient) {
    let session = MicliSession::open(config, account);
    let miio = MicliMiioClient::new(session.clone());
    let mina = MicliMinaClient::new(session.clone());
    (session, miio, mina)
}
