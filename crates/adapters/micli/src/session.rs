//! The shared session: one program, one account, one open/closed flag.

use std::future::Future;
use std::process::Stdio;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mibridge_app::ports::NetworkSession;
use mibridge_domain::command::DeviceId;
use mibridge_domain::error::BridgeError;
use tokio::process::Command;

use crate::account::MiAccount;
use crate::config::MicliConfig;
use crate::error::MicliError;

struct Inner {
    program: String,
    account: MiAccount,
    closed: AtomicBool,
}

/// Handle to the session shared by both micli clients.
///
/// Cloning is cheap; every clone observes the same closed flag.
#[derive(Clone)]
pub struct MicliSession {
    inner: Arc<Inner>,
}

impl MicliSession {
    /// Open the session. Nothing is run and no credential is checked yet.
    #[must_use]
    pub fn open(config: &MicliConfig, account: MiAccount) -> Self {
        tracing::info!(
            program = %config.program,
            token_path = %account.token_path().display(),
            cached_token = account.has_cached_token(),
            "opening micli session"
        );
        Self {
            inner: Arc::new(Inner {
                program: config.program.clone(),
                account,
                closed: AtomicBool::new(false),
            }),
        }
    }

    #[must_use]
    pub fn account(&self) -> &MiAccount {
        &self.inner.account
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Run the program once with `argument` and return its trimmed stdout.
    ///
    /// `MI_DID` is set to `did`, or removed from the child's environment
    /// when `None`. Missing credentials are removed the same way.
    pub(crate) async fn run(
        &self,
        did: Option<&DeviceId>,
        argument: &str,
    ) -> Result<String, MicliError> {
        if self.is_closed() {
            return Err(MicliError::Closed);
        }

        let account = &self.inner.account;
        let mut command = Command::new(&self.inner.program);
        command
            .arg(argument)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        set_env(&mut command, "MI_USER", account.user());
        set_env(&mut command, "MI_PASS", account.password());
        set_env(&mut command, "MI_DID", did.map(DeviceId::as_str));

        tracing::debug!(program = %self.inner.program, argument, "running micli");
        let output = command.output().await.map_err(|source| MicliError::Spawn {
            program: self.inner.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(MicliError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(stdout.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn set_env(command: &mut Command, key: &str, value: Option<&str>) {
    match value {
        Some(value) => command.env(key, value),
        None => command.env_remove(key),
    };
}

impl NetworkSession for MicliSession {
    fn close(&self) -> impl Future<Output = Result<(), BridgeError>> + Send {
        let already_closed = self.inner.closed.swap(true, Ordering::AcqRel);
        if !already_closed {
            tracing::info!("micli session closed");
        }
        async move {
            if already_closed {
                Err(BridgeError::SessionClosed)
            } else {
                Ok(())
            }
        }
    }
}
