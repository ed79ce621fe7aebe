//! # mibridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON command endpoints (`/miio/command`, `/mina/command`,
//!   `/miio/help`) and a `/health` probe
//! - Map request bodies into application service calls (driving adapter)
//! - Map [`CommandOutcome`](mibridge_domain::response::CommandOutcome) values
//!   into HTTP responses, always `200 OK`
//!
//! ## Dependency rule
//! Depends on `mibridge-app` (for port traits and services) and
//! `mibridge-domain` (for request/response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
