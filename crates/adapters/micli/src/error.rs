//! micli adapter error types.

use std::process::ExitStatus;

use mibridge_domain::error::BridgeError;

/// Errors specific to the micli adapter.
///
/// Display texts reach HTTP callers verbatim inside the `result` field.
#[derive(Debug, thiserror::Error)]
pub enum MicliError {
    /// The session was closed at shutdown.
    #[error("session closed")]
    Closed,

    /// The program could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("micli exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },

    /// The program wrote something other than UTF-8.
    #[error("micli output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A device listing was expected but the tool printed something else.
    ///
    /// micli prints the library's exception text and exits successfully
    /// when a call fails, so the output itself is the error message.
    #[error("{0}")]
    UnexpectedOutput(String),

    /// A device command micli would read as speaker mode or as an option.
    #[error("device command {0:?} is reserved by micli (starts with `mina` or `-v`)")]
    AmbiguousCommand(String),

    /// micli only addresses the last listed speaker.
    #[error("micli cannot send to device {0}, only to device -1")]
    UnsupportedTarget(i64),
}

impl MicliError {
    /// Convert into a [`BridgeError`] for propagation across port boundaries.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        match self {
            Self::Closed => BridgeError::SessionClosed,
            other => BridgeError::external(other),
        }
    }
}

impl From<MicliError> for BridgeError {
    fn from(err: MicliError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_closed_to_session_closed() {
        let err: BridgeError = MicliError::Closed.into();
        assert!(matches!(err, BridgeError::SessionClosed));
    }

    #[test]
    fn should_keep_vendor_text_for_unexpected_output() {
        let err: BridgeError =
            MicliError::UnexpectedOutput("Login failed: 70016".to_string()).into();
        assert!(matches!(err, BridgeError::External(_)));
        assert_eq!(err.to_string(), "Login failed: 70016");
    }

    #[test]
    fn should_display_ambiguous_command() {
        let err: BridgeError = MicliError::AmbiguousCommand("mina hi".to_string()).into();
        assert_eq!(
            err.to_string(),
            "device command \"mina hi\" is reserved by micli (starts with `mina` or `-v`)"
        );
    }

    #[test]
    fn should_display_unsupported_target() {
        let err = MicliError::UnsupportedTarget(2);
        assert_eq!(
            err.to_string(),
            "micli cannot send to device 2, only to device -1"
        );
    }

    #[test]
    fn should_name_program_in_spawn_error() {
        let err = MicliError::Spawn {
            program: "micli".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to run `micli`"));
    }
}
