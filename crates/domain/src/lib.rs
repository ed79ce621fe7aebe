//! # mibridge-domain
//!
//! Pure domain model for the mibridge command façade.
//!
//! ## Responsibilities
//! - Inbound command requests and their presence checks
//! - Device identifiers (`mi_did`) and their resolution order
//! - Voice devices as listed by the speaker service
//! - The outbound `{"result": …}` / `{"error": …}` envelope
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod response;
pub mod voice;
