use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Language every verb is translated into.
pub const TARGET_LANGUAGE: &str = "EN-GB";

const DEEPL_FREE_URL: &str = "https://api-free.deepl.com";
const DEEPL_PRO_URL: &str = "https://api.deepl.com";

/// Translation provider interface
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`, letting the provider detect the source language
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error")]
    Authentication,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Provider returned no translation")]
    EmptyTranslation,
}

#[derive(Debug, Deserialize)]
struct DeeplResponse {
    translations: Vec<DeeplTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeeplTranslation {
    text: String,
}

/// Client for the DeepL v2 REST API.
pub struct DeeplTranslator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DeeplTranslator {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| Self::default_base_url(&api_key).to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Free-tier keys carry a `:fx` suffix and live on a separate host.
    pub fn default_base_url(api_key: &str) -> &'static str {
        if api_key.ends_with(":fx") {
            DEEPL_FREE_URL
        } else {
            DEEPL_PRO_URL
        }
    }

    fn first_translation(response: DeeplResponse) -> Result<String, TranslateError> {
        response
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.text)
            .filter(|text| !text.is_empty())
            .ok_or(TranslateError::EmptyTranslation)
    }
}

#[async_trait]
impl Translator for DeeplTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError> {
        let url = format!("{}/v2/translate", self.base_url);
        tracing::debug!("Translating '{}' to {}", text, target_lang);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&[("text", text), ("target_lang", target_lang)])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                tracing::warn!("DeepL rejected the API key");
                return Err(TranslateError::Authentication);
            }
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("DeepL rate limit hit");
                return Err(TranslateError::RateLimitExceeded);
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                tracing::warn!("DeepL returned status {}: {}", status, message);
                return Err(TranslateError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        let body: DeeplResponse = response.json().await?;
        Self::first_translation(body)
    }
}
