//! OAuth access tokens for Cloud Translation.
//!
//! Tokens are never minted here. They come from `GOOGLE_OAUTH_ACCESS_TOKEN`
//! or from `gcloud auth application-default print-access-token`.

use std::path::PathBuf;

use tokio::process::Command;
use tokio::sync::OnceCell;

use super::dispatcher::TranslateError;

/// Environment variable holding a pre-issued access token.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Environment variable read by Application Default Credentials.
const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Lazily fetches and caches one access token per run.
#[derive(Debug)]
pub struct TokenSource {
    credentials: Option<PathBuf>,
    token: OnceCell<String>,
}

impl TokenSource {
    pub fn new(credentials: Option<PathBuf>) -> Self {
        Self {
            credentials,
            token: OnceCell::new(),
        }
    }

    /// Returns the access token, fetching it on first use.
    pub async fn token(&self) -> Result<&str, TranslateError> {
        self.token
            .get_or_try_init(|| self.fetch())
            .await
            .map(String::as_str)
    }

    async fn fetch(&self) -> Result<String, TranslateError> {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            tracing::debug!("using access token from {ACCESS_TOKEN_ENV}");
            return Ok(token.trim().to_string());
        }

        let mut command = Command::new("gcloud");
        command.args(["auth", "application-default", "print-access-token"]);
        // Scoped to the child; this process's environment is left untouched.
        if let Some(path) = &self.credentials {
            command.env(CREDENTIALS_ENV, path);
        }

        tracing::debug!(credentials = ?self.credentials, "requesting access token from gcloud");

        let output = command.output().await.map_err(|e| {
            TranslateError::Auth(format!(
                "failed to run gcloud ({e}); set {ACCESS_TOKEN_ENV} or provide an API key"
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranslateError::Auth(format!(
                "gcloud could not issue an access token: {}",
                stderr.trim()
            )));
        }

        parse_token(&output.stdout)
    }
}

fn parse_token(stdout: &[u8]) -> Result<String, TranslateError> {
    let token = String::from_utf8_lossy(stdout).trim().to_string();
    if token.is_empty() {
        return Err(TranslateError::Auth(
            "gcloud returned an empty access token".to_string(),
        ));
    }
    Ok(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_token_trims_output() {
        assert_eq!(parse_token(b"ya29.token\n").unwrap(), "ya29.token");
    }

    #[test]
    fn test_parse_token_rejects_empty_output() {
        assert!(matches!(parse_token(b"  \n"), Err(TranslateError::Auth(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_token_from_environment() {
        // SAFETY: serialized with other env-mutating tests.
        unsafe {
            std::env::set_var(ACCESS_TOKEN_ENV, " env-token ");
        }

        let source = TokenSource::new(None);
        assert_eq!(source.token().await.unwrap(), "env-token");

        // SAFETY: cleanup of the test-specific value.
        unsafe {
            std::env::remove_var(ACCESS_TOKEN_ENV);
        }

        // Cached after the first fetch.
        assert_eq!(source.token().await.unwrap(), "env-token");
    }
}
