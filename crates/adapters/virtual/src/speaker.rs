//! Virtual speakers — a fixed device list that records spoken messages.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mibridge_app::ports::MinaClient;
use mibridge_domain::error::BridgeError;
use mibridge_domain::voice::{DeviceTarget, VoiceDevice};
use serde_json::{Value, json};

use crate::lock;
use crate::session::VirtualSession;

/// A message spoken on a virtual speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub device_id: String,
    pub message: String,
}

#[derive(Default)]
struct SpeakerState {
    devices: Vec<VoiceDevice>,
    listings: AtomicUsize,
    sent: Mutex<Vec<SentMessage>>,
}

/// Simulated speaker account.
#[derive(Clone)]
pub struct VirtualMinaClient {
    state: Arc<SpeakerState>,
    session: VirtualSession,
}

impl Default for VirtualMinaClient {
    fn default() -> Self {
        let mut kitchen = VoiceDevice::new("virtual-speaker-1", "Kitchen Speaker");
        kitchen.hardware = "LX06".to_string();
        kitchen.capabilities.insert("yunduantts".to_string(), json!(1));

        let mut bedroom = VoiceDevice::new("virtual-speaker-2", "卧室音箱");
        bedroom.hardware = "L05B".to_string();

        Self::with_devices(vec![kitchen, bedroom])
    }
}

impl VirtualMinaClient {
    /// An account exposing exactly `devices`.
    #[must_use]
    pub fn with_devices(devices: Vec<VoiceDevice>) -> Self {
        Self {
            state: Arc::new(SpeakerState {
                devices,
                ..SpeakerState::default()
            }),
            session: VirtualSession::default(),
        }
    }

    /// Share `session`'s lifecycle: calls fail once it is closed.
    #[must_use]
    pub fn bind(mut self, session: &VirtualSession) -> Self {
        self.session = session.clone();
        self
    }

    /// How many times the device list was fetched.
    #[must_use]
    pub fn listings(&self) -> usize {
        self.state.listings.load(Ordering::SeqCst)
    }

    /// Messages spoken so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        lock(&self.state.sent).clone()
    }
}

impl MinaClient for VirtualMinaClient {
    fn device_list(&self) -> impl Future<Output = Result<Vec<VoiceDevice>, BridgeError>> + Send {
        let result = self.session.ensure_open().map(|()| {
            self.state.listings.fetch_add(1, Ordering::SeqCst);
            self.state.devices.clone()
        });
        async move { result }
    }

    fn send_message(
        &self,
        devices: &[VoiceDevice],
        target: DeviceTarget,
        message: &str,
    ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
        let result = self.session.ensure_open().map(|()| {
            let delivered = target.select(devices).is_some_and(|device| {
                tracing::debug!(device = %device.name, message, "virtual speaker speaks");
                lock(&self.state.sent).push(SentMessage {
                    device_id: device.device_id.clone(),
                    message: message.to_string(),
                });
                true
            });
            Value::Bool(delivered)
        });
        async move { result }
    }
}
