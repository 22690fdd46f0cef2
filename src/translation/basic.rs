use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::auth::TokenSource;
use super::dispatcher::{Translation, TranslateError};
use super::google::{api_url, post_json};
use super::language::LanguagePair;

const TRANSLATE_PATH: &str = "language/translate/v2";

#[derive(Debug, Serialize)]
struct BasicRequest<'a> {
    q: &'a [String],
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct BasicResponse {
    data: BasicData,
}

#[derive(Debug, Deserialize)]
struct BasicData {
    #[serde(default)]
    translations: Vec<BasicTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BasicTranslation {
    translated_text: String,
    detected_source_language: Option<String>,
}

/// Client for the Cloud Translation v2 ("Basic") REST API.
///
/// Authenticates with an API key when one is configured, otherwise with an
/// OAuth access token.
pub struct BasicClient {
    http: Client,
    endpoint: String,
    languages: LanguagePair,
    api_key: Option<String>,
    tokens: TokenSource,
}

impl BasicClient {
    pub fn new(
        http: Client,
        endpoint: String,
        languages: LanguagePair,
        api_key: Option<String>,
        tokens: TokenSource,
    ) -> Self {
        Self {
            http,
            endpoint,
            languages,
            api_key,
            tokens,
        }
    }

    pub async fn translate(&self, batch: &[String]) -> Result<Vec<Translation>, TranslateError> {
        let url = api_url(&self.endpoint, TRANSLATE_PATH);
        let body = BasicRequest {
            q: batch,
            target: &self.languages.target,
            source: self.languages.source.code(),
            format: "text",
        };

        let request = match &self.api_key {
            Some(key) => self.http.post(&url).header("x-goog-api-key", key),
            None => self.http.post(&url).bearer_auth(self.tokens.token().await?),
        };

        tracing::debug!(%url, items = batch.len(), "sending basic translation request");

        let response: BasicResponse = post_json(request, &url, &body).await?;
        Ok(into_translations(response))
    }
}

fn into_translations(response: BasicResponse) -> Vec<Translation> {
    response
        .data
        .translations
        .into_iter()
        .map(|t| Translation {
            text: t.translated_text,
            detected_source_language: t.detected_source_language,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::google::decode;
    use crate::translation::language::SourceLanguage;

    #[test]
    fn test_request_omits_source_for_auto_detect() {
        let batch = vec!["Hello".to_string()];
        let body = BasicRequest {
            q: &batch,
            target: "es",
            source: SourceLanguage::Auto.code(),
            format: "text",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"q": ["Hello"], "target": "es", "format": "text"})
        );
    }

    #[test]
    fn test_request_includes_explicit_source() {
        let batch = vec!["a".to_string(), "b".to_string()];
        let source = SourceLanguage::Code("en".to_string());
        let body = BasicRequest {
            q: &batch,
            target: "uk",
            source: source.code(),
            format: "text",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["source"], "en");
        assert_eq!(json["q"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_response_keeps_order_and_detected_language() {
        let body = r#"{"data":{"translations":[
            {"translatedText":"Hola","detectedSourceLanguage":"en"},
            {"translatedText":"Mundo","detectedSourceLanguage":"en"}
        ]}}"#;

        let translations = into_translations(decode(body).unwrap());
        assert_eq!(translations.len(), 2);
        assert_eq!(translations[0].text, "Hola");
        assert_eq!(translations[1].text, "Mundo");
        assert_eq!(
            translations[0].detected_source_language.as_deref(),
            Some("en")
        );
    }

    #[test]
    fn test_response_without_translations_is_empty() {
        let translations = into_translations(decode(r#"{"data":{}}"#).unwrap());
        assert!(translations.is_empty());
    }
}
