//! Inbound command requests.
//!
//! A request body is an arbitrary JSON object. Only `command` and `mi_did`
//! carry meaning; every other key is ignored and no schema is enforced
//! beyond presence checks.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

/// Number of leading characters stripped from a voice command before the
/// remainder is sent as the spoken message.
pub const VOICE_PREFIX_LEN: usize = 4;

/// Body of `POST /miio/command` and `POST /mina/command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandRequest {
    /// Free-form command text. Its structure belongs to the external library.
    #[serde(default, deserialize_with = "string_or_none")]
    pub command: Option<String>,
    /// Optional device id overriding the configured default.
    #[serde(default, deserialize_with = "string_or_none")]
    pub mi_did: Option<String>,
}

impl CommandRequest {
    /// Build a request carrying only a command.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            mi_did: None,
        }
    }

    /// Set the device id override.
    #[must_use]
    pub fn with_mi_did(mut self, mi_did: impl Into<String>) -> Self {
        self.mi_did = Some(mi_did.into());
        self
    }

    /// The command text, if present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCommand`] otherwise.
    pub fn command(&self) -> Result<&str, ValidationError> {
        self.command
            .as_deref()
            .filter(|cmd| !cmd.is_empty())
            .ok_or(ValidationError::MissingCommand)
    }

    /// Resolve the target device: the body's `mi_did` when non-empty, else
    /// `default`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingDeviceId`] when neither is usable.
    pub fn resolve_device(&self, default: Option<&DeviceId>) -> Result<DeviceId, ValidationError> {
        self.mi_did
            .as_deref()
            .and_then(DeviceId::parse)
            .or_else(|| default.cloned())
            .ok_or(ValidationError::MissingDeviceId)
    }
}

/// Accept any JSON value, keeping only strings.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

/// Vendor-assigned identifier of a smart-home device (`mi_did`).
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Parse a device id, returning `None` for an empty string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The message part of a voice command: everything from character offset
/// [`VOICE_PREFIX_LEN`] onwards.
///
/// Returns `None` when the command has [`VOICE_PREFIX_LEN`] characters or
/// fewer. Offsets count Unicode scalar values, not bytes.
#[must_use]
pub fn voice_payload(command: &str) -> Option<&str> {
    command
        .char_indices()
        .nth(VOICE_PREFIX_LEN)
        .map(|(offset, _)| &command[offset..])
}
