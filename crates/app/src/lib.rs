//! # mibridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the external account/service library must be
//!   wrapped behind (driven/outbound ports):
//!   - `MiioClient` — device commands addressed by `mi_did`
//!   - `MinaClient` — speaker device list and text-to-speech
//!   - `NetworkSession` — the shared session released at shutdown
//! - Define **driving/inbound ports** as use-case structs:
//!   - `MiioCommandService` — validate, resolve the device, dispatch, render
//!   - `MinaCommandService` — validate, strip the prefix, dispatch
//! - Hold the process-wide [`bridge::Bridge`] built once at startup
//!
//! ## Dependency rule
//! Depends on `mibridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod bridge;
pub mod ports;
pub mod services;
