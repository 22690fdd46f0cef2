use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::auth::TokenSource;
use super::dispatcher::{Translation, TranslateError};
use super::google::{api_url, post_json};
use super::language::LanguagePair;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvancedRequest<'a> {
    contents: &'a [String],
    target_language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language_code: Option<&'a str>,
    mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct AdvancedResponse {
    #[serde(default)]
    translations: Vec<AdvancedTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvancedTranslation {
    translated_text: String,
    detected_language_code: Option<String>,
}

/// Client for the Cloud Translation v3 ("Advanced") REST API.
pub struct AdvancedClient {
    http: Client,
    endpoint: String,
    languages: LanguagePair,
    project_id: String,
    tokens: TokenSource,
}

impl AdvancedClient {
    pub fn new(
        http: Client,
        endpoint: String,
        languages: LanguagePair,
        project_id: String,
        tokens: TokenSource,
    ) -> Self {
        Self {
            http,
            endpoint,
            languages,
            project_id,
            tokens,
        }
    }

    pub async fn translate(&self, batch: &[String]) -> Result<Vec<Translation>, TranslateError> {
        let url = api_url(&self.endpoint, &translate_path(&self.project_id));
        let body = AdvancedRequest {
            contents: batch,
            target_language_code: &self.languages.target,
            source_language_code: self.languages.source.code(),
            mime_type: "text/plain",
        };

        let token = self.tokens.token().await?;
        let request = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header("x-goog-user-project", &self.project_id);

        tracing::debug!(%url, items = batch.len(), "sending advanced translation request");

        let response: AdvancedResponse = post_json(request, &url, &body).await?;
        Ok(into_translations(response))
    }
}

fn translate_path(project_id: &str) -> String {
    format!("v3/projects/{project_id}/locations/global:translateText")
}

fn into_translations(response: AdvancedResponse) -> Vec<Translation> {
    response
        .translations
        .into_iter()
        .map(|t| Translation {
            text: t.translated_text,
            detected_source_language: t.detected_language_code,
        })
        .collect()
}
