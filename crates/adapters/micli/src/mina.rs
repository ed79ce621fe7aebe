//! Voice-command client.

use std::future::Future;

use mibridge_app::ports::MinaClient;
use mibridge_domain::error::BridgeError;
use mibridge_domain::voice::{DeviceTarget, VoiceDevice};
use serde_json::Value;

use crate::error::MicliError;
use crate::session::MicliSession;

/// Argument selecting micli's speaker mode.
const MINA_PREFIX: &str = "mina";

/// Lists speakers and speaks messages through micli.
#[derive(Clone)]
pub struct MicliMinaClient {
    session: MicliSession,
}

impl MicliMinaClient {
    #[must_use]
    pub fn new(session: MicliSession) -> Self {
        Self { session }
    }

    /// Run micli in speaker mode and parse the device list it prints.
    async fn list(&self, argument: &str) -> Result<Vec<VoiceDevice>, MicliError> {
        let output = self.session.run(None, argument).await?;
        serde_json::from_str(&output).map_err(|_| MicliError::UnexpectedOutput(output))
    }
}

impl MinaClient for MicliMinaClient {
    fn device_list(&self) -> impl Future<Output = Result<Vec<VoiceDevice>, BridgeError>> + Send {
        async move { Ok(self.list(MINA_PREFIX).await?) }
    }

    /// micli fetches its own device list and always speaks on the last
    /// device, so `devices` only serves to short-circuit an empty account.
    ///
    /// `true` means micli printed a device list after speaking; it does not
    /// expose whether the speaker accepted the message.
    fn send_message(
        &self,
        devices: &[VoiceDevice],
        target: DeviceTarget,
        message: &str,
    ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
        async move {
            if target != DeviceTarget::Last {
                return Err(MicliError::UnsupportedTarget(target.as_devno()).into());
            }
            if devices.is_empty() {
                return Ok(Value::Bool(false));
            }
            self.list(&format!("{MINA_PREFIX}{message}")).await?;
            Ok(Value::Bool(true))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::account::MiAccount;
    use crate::config::MicliConfig;

    fn client(program: &str) -> MicliMinaClient {
        let session = MicliSession::open(
            &MicliConfig {
                program: program.to_string(),
            },
            MiAccount::new(None, None),
        );
        MicliMinaClient::new(session)
    }

    /// Write an executable script printing a one-speaker device list.
    fn listing_script(name: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        std::fs::write(
            &path,
            "#!/bin/sh\necho '[{\"deviceID\": \"a1b2\", \"name\": \"Kitchen\"}]'\n",
        )
        .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn should_parse_device_listing() {
        let devices = client(&listing_script("micli-list"))
            .device_list()
            .await
            .unwrap();
        assert_eq!(devices, vec![VoiceDevice::new("a1b2", "Kitchen")]);
    }

    #[tokio::test]
    async fn should_report_true_when_micli_prints_device_list() {
        let devices = vec![VoiceDevice::new("a1b2", "Kitchen")];
        let result = client(&listing_script("micli-send"))
            .send_message(&devices, DeviceTarget::Last, " hello")
            .await
            .unwrap();
        assert_eq!(result, Value::Bool(true));
    }

    #[tokio::test]
    async fn should_treat_non_json_listing_as_vendor_error_text() {
        let err = client("echo").device_list().await.unwrap_err();
        assert_eq!(err.to_string(), "mina");
    }

    #[tokio::test]
    async fn should_reject_targets_other_than_last() {
        let devices = vec![VoiceDevice::new("a", "Kitchen")];
        let err = client("echo")
            .send_message(&devices, DeviceTarget::Index(0), "hello")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "micli cannot send to device 0, only to device -1"
        );
    }

    #[tokio::test]
    async fn should_not_run_micli_for_empty_device_list() {
        let result = client("/nonexistent/micli")
            .send_message(&[], DeviceTarget::Last, " hello")
            .await
            .unwrap();
        assert_eq!(result, Value::Bool(false));
    }

    #[tokio::test]
    async fn should_surface_send_failure_text() {
        let devices = vec![VoiceDevice::new("a", "Kitchen")];
        let err = client("echo")
            .send_message(&devices, DeviceTarget::Last, " hello")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "mina hello");
    }
}
