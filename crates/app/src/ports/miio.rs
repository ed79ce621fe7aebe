//! Device-command port.

use std::future::Future;

use mibridge_domain::command::DeviceId;
use mibridge_domain::error::BridgeError;

/// Client for free-form device commands.
///
/// The command text is opaque to the façade; its grammar (property reads,
/// `2=#60` style writes, actions, …) is defined by the external library.
pub trait MiioClient: Send + Sync {
    /// Run `command` against device `did`.
    ///
    /// `prefix` is the auxiliary argument the library prepends to generated
    /// help text; the façade always passes an empty string.
    fn execute(
        &self,
        did: &DeviceId,
        command: &str,
        prefix: &str,
    ) -> impl Future<Output = Result<serde_json::Value, BridgeError>> + Send;

    /// Human-readable description of the accepted command grammar.
    fn help(
        &self,
        did: Option<&DeviceId>,
        prefix: &str,
    ) -> impl Future<Output = Result<String, BridgeError>> + Send;
}
