//! Voice command service — use-cases behind `POST /mina/command`.

use mibridge_domain::command::{CommandRequest, voice_payload};
use mibridge_domain::error::BridgeError;
use mibridge_domain::response::{COMMAND_TOO_SHORT, CommandOutcome};
use mibridge_domain::voice::DeviceTarget;

use crate::ports::MinaClient;

/// Application service dispatching voice commands.
pub struct MinaCommandService<C> {
    client: C,
}

impl<C: MinaClient> MinaCommandService<C> {
    /// Create a new service backed by `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Validate `request`, strip the four-character prefix and speak the
    /// remainder on the last listed device.
    ///
    /// Commands of four characters or fewer get the fixed
    /// [`COMMAND_TOO_SHORT`] reply and never reach the client.
    #[tracing::instrument(skip(self, request))]
    pub async fn execute(&self, request: CommandRequest) -> CommandOutcome {
        let command = match request.command() {
            Ok(command) => command,
            Err(err) => return err.into(),
        };
        let Some(message) = voice_payload(command) else {
            return CommandOutcome::text(COMMAND_TOO_SHORT);
        };

        match self.speak(message).await {
            Ok(value) => CommandOutcome::Result(value),
            Err(err) => {
                tracing::warn!(error = %err, "voice command failed");
                CommandOutcome::failure(&err)
            }
        }
    }

    async fn speak(&self, message: &str) -> Result<serde_json::Value, BridgeError> {
        let devices = self.client.device_list().await?;
        tracing::debug!(devices = devices.len(), message, "sending voice message");
        self.client
            .send_message(&devices, DeviceTarget::Last, message)
            .await
    }
}
