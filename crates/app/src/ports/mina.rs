//! Voice-command port.

use std::future::Future;

use mibridge_domain::error::BridgeError;
use mibridge_domain::voice::{DeviceTarget, VoiceDevice};

/// Client for the speaker service.
pub trait MinaClient: Send + Sync {
    /// Fetch the devices currently registered on the account.
    fn device_list(&self) -> impl Future<Output = Result<Vec<VoiceDevice>, BridgeError>> + Send;

    /// Speak `message` on the device of `devices` selected by `target`.
    ///
    /// Returns whatever the library reports for the send.
    fn send_message(
        &self,
        devices: &[VoiceDevice],
        target: DeviceTarget,
        message: &str,
    ) -> impl Future<Output = Result<serde_json::Value, BridgeError>> + Send;
}
