//! Device command service — use-cases behind `POST /miio/command`.

use mibridge_domain::command::{CommandRequest, DeviceId};
use mibridge_domain::response::{CommandOutcome, render_result};

use crate::ports::MiioClient;

/// Application service dispatching device commands.
pub struct MiioCommandService<C> {
    client: C,
    default_did: Option<DeviceId>,
}

impl<C: MiioClient> MiioCommandService<C> {
    /// Create a new service backed by `client`, falling back to
    /// `default_did` when a request names no device.
    pub fn new(client: C, default_did: Option<DeviceId>) -> Self {
        Self {
            client,
            default_did,
        }
    }

    /// The configured default device, if any.
    pub fn default_did(&self) -> Option<&DeviceId> {
        self.default_did.as_ref()
    }

    /// Validate `request` and forward it to the device client.
    ///
    /// Missing fields yield [`CommandOutcome::Error`] without touching the
    /// client. Client failures are folded into [`CommandOutcome::Result`] as
    /// their display text.
    #[tracing::instrument(skip(self, request))]
    pub async fn execute(&self, request: CommandRequest) -> CommandOutcome {
        let command = match request.command() {
            Ok(command) => command,
            Err(err) => return err.into(),
        };
        let did = match request.resolve_device(self.default_did.as_ref()) {
            Ok(did) => did,
            Err(err) => return err.into(),
        };

        tracing::debug!(%did, command, "dispatching device command");
        match self.client.execute(&did, command, "").await {
            Ok(value) => CommandOutcome::text(render_result(value)),
            Err(err) => {
                tracing::warn!(%did, error = %err, "device command failed");
                CommandOutcome::failure(&err)
            }
        }
    }

    /// Describe the command grammar for the default device.
    #[tracing::instrument(skip(self))]
    pub async fn help(&self) -> CommandOutcome {
        match self.client.help(self.default_did.as_ref(), "").await {
            Ok(text) => CommandOutcome::text(text),
            Err(err) => {
                tracing::warn!(error = %err, "command help failed");
                CommandOutcome::failure(&err)
            }
        }
    }
}
