use thiserror::Error;

use crate::translate::ProviderError;

/// Every way a translation request can fail. The display text is the
/// `error` field returned to the caller.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Failed to parse JSON: {0}")]
    BodyParse(#[from] serde_json::Error),
    #[error("Failed to read request body: {0}")]
    BodyRead(String),
    #[error("'text' parameter is missing.")]
    MissingText,
    #[error("Invalid language code. 'from' and 'to' must be valid ISO 639-1 codes.")]
    InvalidLanguageCode,
    #[error("Translation error: {0}")]
    TranslationFailure(#[from] ProviderError),
}
