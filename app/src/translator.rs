use crate::config::TranslationSettings;
use crate::error::{Result, TourError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_sentence: Option<String>,
}

/// Client for the sentence translation API.
///
/// Sends one form-encoded POST per call. No retries and no timeout: a failed
/// call is reported to the caller, which keeps showing the original text.
pub struct TranslationClient {
    client: Client,
    api_url: String,
    api_key: String,
    source_language: String,
}

impl TranslationClient {
    pub fn new(settings: &TranslationSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(TourError::TranslationUnavailable)?;

        let client = Client::builder().build().map_err(TourError::Http)?;

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            api_key,
            source_language: settings.source_language.clone(),
        })
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub async fn translate(&self, sentence: &str, dest_lang: &str) -> Result<String> {
        debug!(
            "Translating {} chars {} -> {}",
            sentence.len(),
            self.source_language,
            dest_lang
        );

        match self.send(sentence, dest_lang).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Translation to {} failed: {}", dest_lang, e);
                Err(e)
            }
        }
    }

    async fn send(&self, sentence: &str, dest_lang: &str) -> Result<String> {
        let params = [
            ("key", self.api_key.as_str()),
            ("sentence", sentence),
            ("src_lang", self.source_language.as_str()),
            ("dest_lang", dest_lang),
        ];

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        if !response.status().is_success() {
            return Err(TourError::InvalidResponse(format!(
                "HTTP {} from translation API",
                response.status()
            )));
        }

        let body: TranslateResponse = response.json().await?;

        body.translated_sentence
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                TourError::InvalidResponse("missing translated_sentence in response".to_string())
            })
    }
}
