use async_trait::async_trait;
use thiserror::Error;

/// Failure raised by a translation backend. The display text is shown to
/// API callers after the `Translation error: ` prefix.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failed to reach translation provider: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("translation provider quota exceeded (HTTP 429)")]
    QuotaExceeded,
    #[error("translation provider returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("failed to parse translation provider response: {0}")]
    ParseFailed(#[from] serde_json::Error),
    #[error("unexpected translation provider response: {0}")]
    UnexpectedResponse(String),
    #[error("translation is empty")]
    Empty,
    #[error("{0}")]
    Rejected(String),
}

const MAX_DETAIL_CHARS: usize = 200;

impl ProviderError {
    /// Non-success HTTP status. Only a short plain-text excerpt of the body is
    /// kept since the message is shown to API callers; markup is dropped.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let detail = if body.is_empty() {
            "empty response".to_string()
        } else if body.starts_with('<') {
            "non-text response omitted".to_string()
        } else {
            let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
            let mut detail: String = flat.chars().take(MAX_DETAIL_CHARS).collect();
            if flat.chars().count() > MAX_DETAIL_CHARS {
                detail.push_str("...");
            }
            detail
        };
        ProviderError::Status { status, detail }
    }
}

/// External translation capability
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang` (ISO 639-1 codes)
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    /// Backend name as configured by `translator_model`
    fn name(&self) -> &str;
}
