//! micli adapter configuration.

use serde::Deserialize;

/// Configuration for the micli adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MicliConfig {
    /// Program to run, looked up on `PATH` unless absolute.
    pub program: String,
}

impl Default for MicliConfig {
    fn default() -> Self {
        Self {
            program: "micli".to_string(),
        }
    }
}
