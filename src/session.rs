//! Session credential storage.
//!
//! The bearer credential lives in `~/.config/quill/session.token` (created
//! with user-only permissions on Unix). The `QUILL_TOKEN` environment
//! variable takes precedence over the file, matching the env-over-config
//! convention used elsewhere. The credential is held as a `SecretString`
//! and never printed; Debug output is redacted.
//!
//! There is no ambient singleton: the loaded `Session` is owned by the app
//! and the credential is passed to the submission pipeline explicitly.

use secrecy::SecretString;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SESSION_FILE: &str = "session.token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
}

/// The current authentication state.
pub struct Session {
    credential: Option<SecretString>,
    path: PathBuf,
    /// True when the credential came from `QUILL_TOKEN` rather than the file.
    from_env: bool,
}

impl Session {
    /// Load the session from the environment or the config directory.
    ///
    /// A missing file simply yields an unauthenticated session; only I/O
    /// failures on an existing file are errors.
    pub fn load(config_dir: &Path) -> Result<Self, SessionError> {
        let path = config_dir.join(SESSION_FILE);

        if let Ok(token) = std::env::var("QUILL_TOKEN") {
            if !token.trim().is_empty() {
                tracing::debug!("Using session credential from QUILL_TOKEN");
                return Ok(Self {
                    credential: Some(SecretString::from(token.trim().to_owned())),
                    path,
                    from_env: true,
                });
            }
        }

        let credential = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(SecretString::from(token.to_owned()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No session file, starting unauthenticated");
                None
            }
            Err(e) => return Err(SessionError::Io(e)),
        };

        Ok(Self {
            credential,
            path,
            from_env: false,
        })
    }

    /// The credential to attach to submissions, if authenticated.
    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Store a new credential, replacing any existing one.
    pub fn store(&mut self, token: &str) -> Result<(), SessionError> {
        std::fs::write(&self.path, token.trim())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&self.path, perms) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to set session file permissions to 0600"
                );
            }
        }

        self.credential = Some(SecretString::from(token.trim().to_owned()));
        self.from_env = false;
        tracing::info!(path = %self.path.display(), "Session credential stored");
        Ok(())
    }

    /// Clear the session: forget the in-memory credential and remove the
    /// stored file. Used when the server reports the session has expired.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.credential = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Session credential cleared");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(SessionError::Io(e)),
        }
        if self.from_env {
            // The env var remains set in the process environment; the cleared
            // in-memory state governs until restart.
            tracing::warn!("Cleared a credential that was supplied via QUILL_TOKEN");
        }
        Ok(())
    }
}

/// Redact the credential in Debug output.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credential", &self.credential.as_ref().map(|_| "[REDACTED]"))
            .field("path", &self.path)
            .field("from_env", &self.from_env)
            .finish()
    }
}
