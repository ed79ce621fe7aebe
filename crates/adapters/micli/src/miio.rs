//! Device-command client.

use std::future::Future;

use mibridge_app::ports::MiioClient;
use mibridge_domain::command::DeviceId;
use mibridge_domain::error::BridgeError;
use serde_json::Value;

use crate::error::MicliError;
use crate::session::MicliSession;

/// Leading arguments micli handles itself instead of sending to the device.
const RESERVED_PREFIXES: [&str; 2] = ["mina", "-v"];

/// Runs device commands through micli.
///
/// micli renders non-string results itself, so every successful call yields
/// a [`Value::String`]. The help prefix is chosen by micli (its own program
/// name) and the `prefix` argument is not forwarded.
#[derive(Clone)]
pub struct MicliMiioClient {
    session: MicliSession,
}

impl MicliMiioClient {
    #[must_use]
    pub fn new(session: MicliSession) -> Self {
        Self { session }
    }
}

impl MiioClient for MicliMiioClient {
    fn execute(
        &self,
        did: &DeviceId,
        command: &str,
        _prefix: &str,
    ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
        async move {
            if RESERVED_PREFIXES
                .iter()
                .any(|prefix| command.starts_with(prefix))
            {
                return Err(MicliError::AmbiguousCommand(command.to_string()).into());
            }
            let output = self.session.run(Some(did), command).await?;
            Ok(Value::String(output))
        }
    }

    fn help(
        &self,
        did: Option<&DeviceId>,
        _prefix: &str,
    ) -> impl Future<Output = Result<String, BridgeError>> + Send {
        async move { Ok(self.session.run(did, "help").await?) }
    }
}
