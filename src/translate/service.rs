use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{ProviderError, Translator};

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Translator that delegates to an external translation microservice
#[derive(Debug, Clone)]
pub struct ServiceTranslator {
    client: Client,
    base_url: String,
}

impl ServiceTranslator {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for ServiceTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };
        debug!("Sending translate request to {}", url);

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::QuotaExceeded);
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), &body));
        }

        let result: TranslateResponse = serde_json::from_str(&body)?;
        if !result.success {
            let error_msg = result.error.unwrap_or_else(|| "Unknown error".to_string());
            return Err(ProviderError::Rejected(error_msg));
        }
        match result.translated_text.len() {
            0 => Err(ProviderError::Empty),
            _ => Ok(result.translated_text),
        }
    }

    fn name(&self) -> &str {
        "translation_service"
    }
}
