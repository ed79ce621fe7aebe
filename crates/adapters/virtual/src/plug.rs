//! Virtual plug — answers device commands from an in-memory property table.

use std::future::Future;
use std::sync::{Arc, Mutex};

use mibridge_app::ports::MiioClient;
use mibridge_domain::command::DeviceId;
use mibridge_domain::error::BridgeError;
use serde_json::{Map, Value, json};

use crate::lock;
use crate::session::VirtualSession;

const HELP: &str = "\
Get Props: <siid[-piid]>[,...]
           2-1,3-1
Set Props: <siid[-piid]=[#]value> [...]
           2-1=#true 4-1=台灯
List Props: props";

/// A device command as received by the virtual plug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiioCall {
    pub did: String,
    pub command: String,
    pub prefix: String,
}

/// Why the virtual plug refused a command.
#[derive(Debug, thiserror::Error)]
enum PlugError {
    #[error("unknown property {0}")]
    UnknownProperty(String),
    #[error("malformed assignment {0}")]
    MalformedAssignment(String),
    #[error("invalid value for {key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Injected(String),
}

struct PlugState {
    properties: Mutex<Map<String, Value>>,
    calls: Mutex<Vec<MiioCall>>,
    failure: Option<String>,
}

/// Simulated smart plug reachable under any device id.
#[derive(Clone)]
pub struct VirtualMiioClient {
    state: Arc<PlugState>,
    session: VirtualSession,
}

impl Default for VirtualMiioClient {
    fn default() -> Self {
        Self::with_failure(None)
    }
}

impl VirtualMiioClient {
    /// A plug that rejects every command with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_failure(Some(message.into()))
    }

    fn with_failure(failure: Option<String>) -> Self {
        let mut properties = Map::new();
        properties.insert("2-1".to_string(), json!(false));
        properties.insert("2-2".to_string(), json!(0));
        properties.insert("3-1".to_string(), json!(23.5));
        properties.insert("4-1".to_string(), json!("虚拟插座"));
        Self {
            state: Arc::new(PlugState {
                properties: Mutex::new(properties),
                calls: Mutex::default(),
                failure,
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

    /// Every command received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<MiioCall> {
        lock(&self.state.calls).clone()
    }

    /// Current value of a property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<Value> {
        lock(&self.state.properties).get(key).cloned()
    }

    fn apply(&self, command: &str) -> Result<Value, PlugError> {
        if let Some(message) = &self.state.failure {
            return Err(PlugError::Injected(message.clone()));
        }

        let command = command.trim();
        let mut properties = lock(&self.state.properties);
        if command == "props" {
            return Ok(Value::Object(properties.clone()));
        }

        let mut results = Map::new();
        if command.contains('=') {
            for assignment in command.split_whitespace() {
                let (key, raw) = assignment
                    .split_once('=')
                    .ok_or_else(|| PlugError::MalformedAssignment(assignment.to_string()))?;
                let slot = properties
                    .get_mut(key)
                    .ok_or_else(|| PlugError::UnknownProperty(key.to_string()))?;
                *slot = match raw.strip_prefix('#') {
                    Some(literal) => {
                        serde_json::from_str(literal).map_err(|source| PlugError::InvalidValue {
                            key: key.to_string(),
                            source,
                        })?
                    }
                    None => Value::String(raw.to_string()),
                };
                results.insert(key.to_string(), json!(0));
            }
        } else {
            for key in command.split(',').map(str::trim) {
                let value = properties
                    .get(key)
                    .ok_or_else(|| PlugError::UnknownProperty(key.to_string()))?;
                results.insert(key.to_string(), value.clone());
            }
        }
        Ok(Value::Object(results))
    }
}

impl MiioClient for VirtualMiioClient {
    fn execute(
        &self,
        did: &DeviceId,
        command: &str,
        prefix: &str,
    ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
        let open = self.session.ensure_open();
        lock(&self.state.calls).push(MiioCall {
            did: did.to_string(),
            command: command.to_string(),
            prefix: prefix.to_string(),
        });
        tracing::debug!(%did, command, "virtual plug command");
        let result = open.and_then(|()| self.apply(command).map_err(BridgeError::external));
        async move { result }
    }

    fn help(
        &self,
        did: Option<&DeviceId>,
        prefix: &str,
    ) -> impl Future<Output = Result<String, BridgeError>> + Send {
        let result = self.session.ensure_open().map(|()| match did {
            Some(did) => format!("{prefix}Virtual Plug {did}\n{HELP}"),
            None => format!("{prefix}Virtual Plug\n{HELP}"),
        });
        async move { result }
    }
}
