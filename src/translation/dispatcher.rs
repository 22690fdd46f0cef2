use std::future::Future;

use thiserror::Error;

use super::advanced::AdvancedClient;
use super::auth::TokenSource;
use super::basic::BasicClient;
use crate::config::{ApiMode, ResolvedConfig};

/// Failures of the translation capability.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("cannot translate an empty batch")]
    EmptyBatch,

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("translation API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("failed to reach translation API at {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode translation API response")]
    Decode(#[source] serde_json::Error),

    #[error("no translation returned")]
    EmptyResult,

    #[error("expected {expected} translations, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// One translated item as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Only reported when the source language was auto-detected.
    pub detected_source_language: Option<String>,
}

/// Translates an ordered batch of strings.
///
/// Implementations return exactly one output per input, in input order.
pub trait Translate {
    fn translate(
        &self,
        batch: &[String],
    ) -> impl Future<Output = Result<Vec<String>, TranslateError>> + Send;
}

/// The configured translation backend.
pub enum Translator {
    /// Cloud Translation v2.
    Basic(BasicClient),
    /// Cloud Translation v3, scoped to a project.
    Advanced(AdvancedClient),
}

impl Translator {
    /// Builds the backend selected by the configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let http = reqwest::Client::new();
        let tokens = TokenSource::new(config.credentials.clone());

        match &config.mode {
            ApiMode::Basic => Self::Basic(BasicClient::new(
                http,
                config.endpoint.clone(),
                config.languages.clone(),
                config.api_key.clone(),
                tokens,
            )),
            ApiMode::Advanced { project_id } => {
                if config.api_key.is_some() {
                    crate::warn!(
                        "Warning: the API key is ignored by the Advanced API, which uses an access token"
                    );
                }
                Self::Advanced(AdvancedClient::new(
                    http,
                    config.endpoint.clone(),
                    config.languages.clone(),
                    project_id.clone(),
                    tokens,
                ))
            }
        }
    }

    /// Human-readable backend name.
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Basic(_) => "Basic",
            Self::Advanced(_) => "Advanced",
        }
    }

    /// Translates a batch, keeping the per-item detected source language.
    pub async fn translate_detailed(
        &self,
        batch: &[String],
    ) -> Result<Vec<Translation>, TranslateError> {
        if batch.is_empty() {
            return Err(TranslateError::EmptyBatch);
        }

        let translations = match self {
            Self::Basic(client) => client.translate(batch).await?,
            Self::Advanced(client) => client.translate(batch).await?,
        };

        check_batch_len(batch.len(), translations.len())?;

        if let Some(detected) = translations
            .iter()
            .find_map(|t| t.detected_source_language.as_deref())
        {
            tracing::debug!(api = self.api_name(), detected, "source language detected");
        }

        Ok(translations)
    }
}

impl Translate for Translator {
    async fn translate(&self, batch: &[String]) -> Result<Vec<String>, TranslateError> {
        let translations = self.translate_detailed(batch).await?;
        Ok(translations.into_iter().map(|t| t.text).collect())
    }
}

/// Fails unless a result batch matches the size of its request.
pub fn check_batch_len(expected: usize, actual: usize) -> Result<(), TranslateError> {
    if actual == expected {
        Ok(())
    } else if actual == 0 {
        Err(TranslateError::EmptyResult)
    } else {
        Err(TranslateError::LengthMismatch { expected, actual })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_check_batch_len_accepts_equal_sizes() {
        assert!(check_batch_len(3, 3).is_ok());
    }

    #[test]
    fn test_check_batch_len_zero_results_is_empty_result() {
        assert!(matches!(
            check_batch_len(2, 0),
            Err(TranslateError::EmptyResult)
        ));
    }

    #[test]
    fn test_check_batch_len_reports_mismatch() {
        let err = check_batch_len(3, 2).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(err.to_string(), "expected 3 translations, got 2");
    }
}
