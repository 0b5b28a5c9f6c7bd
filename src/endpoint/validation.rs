use regex::Regex;
use std::sync::OnceLock;

use super::error::EndpointError;
use super::request::TranslationRequest;

/// Format check only: two lowercase ASCII letters. This does not verify the
/// code names a real or supported ISO 639-1 language.
pub fn is_valid_language_code(code: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[a-z]{2}$").expect("static pattern is valid"))
        .is_match(code)
}

/// Returns the text to translate when the request may be sent to the translator
pub fn validate(request: &TranslationRequest) -> Result<&str, EndpointError> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(EndpointError::MissingText),
    };

    if !is_valid_language_code(&request.from) || !is_valid_language_code(&request.to) {
        return Err(EndpointError::InvalidLanguageCode);
    }

    Ok(text)
}
