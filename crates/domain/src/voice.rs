//! Voice (speaker) devices as reported by the voice-command service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the speaker service's device list.
///
/// Only the fields the façade reads are typed; everything else the vendor
/// returns is kept in `extra` and serialised back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDevice {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hardware: String,
    #[serde(default)]
    pub capabilities: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VoiceDevice {
    #[must_use]
    pub fn new(device_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            hardware: String::new(),
            capabilities: Map::new(),
            extra: Map::new(),
        }
    }
}

/// Which device of a fetched list a voice message is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTarget {
    /// The vendor's index `-1`: the last device of the list.
    Last,
    /// A zero-based position in the list.
    Index(usize),
}

impl DeviceTarget {
    /// The vendor's numeric convention for this target.
    #[must_use]
    pub fn as_devno(self) -> i64 {
        match self {
            Self::Last => -1,
            Self::Index(index) => i64::try_from(index).unwrap_or(i64::MAX),
        }
    }

    /// Pick the targeted device out of `devices`.
    #[must_use]
    pub fn select(self, devices: &[VoiceDevice]) -> Option<&VoiceDevice> {
        match self {
            Self::Last => devices.last(),
            Self::Index(index) => devices.get(index),
        }
    }
}
