//! Transport shared by the Cloud Translation backends.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::dispatcher::TranslateError;

/// Public Cloud Translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Joins an endpoint base with an API path.
pub fn api_url(endpoint: &str, path: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), path)
}

/// Sends a JSON request and decodes a successful JSON response.
pub async fn post_json<B, R>(
    request: RequestBuilder,
    url: &str,
    body: &B,
) -> Result<R, TranslateError>
where
    B: Serialize + ?Sized + Sync,
    R: DeserializeOwned,
{
    let network = |source| TranslateError::Network {
        url: url.to_string(),
        source,
    };

    let response = request.json(body).send().await.map_err(network)?;
    let status = response.status();
    let text = response.text().await.map_err(network)?;

    tracing::debug!(%url, status = status.as_u16(), bytes = text.len(), "translation API responded");

    if !status.is_success() {
        return Err(classify_failure(status.as_u16(), &text));
    }

    decode(&text)
}

/// Decodes a success body.
pub fn decode<R: DeserializeOwned>(body: &str) -> Result<R, TranslateError> {
    serde_json::from_str(body).map_err(TranslateError::Decode)
}

/// Maps a non-success response onto the error taxonomy.
///
/// Google wraps failures as `{"error": {"code", "message", "status"}}`; bodies
/// in any other shape are reported verbatim.
pub fn classify_failure(status: u16, body: &str) -> TranslateError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 | 403 => TranslateError::Auth(message),
        400 if message.to_ascii_lowercase().contains("language") => {
            TranslateError::InvalidLanguage(message)
        }
        _ => TranslateError::Upstream { status, message },
    }
}
