//! Account credentials and token cache location.

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the login token cache, relative to the home directory.
pub const TOKEN_FILE_NAME: &str = ".mi.token";

/// Credentials handed to the vendor library.
///
/// Both fields are optional: a missing credential only surfaces as a login
/// failure when a command is actually run. The token cache is always
/// `~/.mi.token`, the only location micli reads and writes.
#[derive(Clone)]
pub struct MiAccount {
    user: Option<String>,
    password: Option<String>,
    token_path: PathBuf,
}

impl MiAccount {
    /// Bind credentials to the home-directory token cache.
    #[must_use]
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        Self {
            user,
            password,
            token_path: Self::default_token_path(),
        }
    }

    /// `~/.mi.token`, or `.mi.token` in the working directory when no home
    /// directory can be determined.
    #[must_use]
    pub fn default_token_path() -> PathBuf {
        dirs::home_dir().map_or_else(
            || PathBuf::from(TOKEN_FILE_NAME),
            |home| home.join(TOKEN_FILE_NAME),
        )
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    #[must_use]
    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    /// Whether the vendor library left a cached login behind.
    #[must_use]
    pub fn has_cached_token(&self) -> bool {
        self.token_path.is_file()
    }
}

impl fmt::Debug for MiAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiAccount")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token_path", &self.token_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_place_token_file_in_home_directory() {
        let path = MiAccount::default_token_path();
        assert!(path.ends_with(TOKEN_FILE_NAME));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".mi.token"));
        }
    }

    #[test]
    fn should_redact_password_in_debug_output() {
        let account = MiAccount::new(
            Some("user@example.com".to_string()),
            Some("hunter2".to_string()),
        );
        let debug = format!("{account:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn should_bind_account_to_home_token_cache() {
        let account = MiAccount::new(None, None);
        assert_eq!(account.token_path(), MiAccount::default_token_path());
        assert!(account.user().is_none());
        assert!(account.password().is_none());
    }
}
