use async_trait::async_trait;
use std::sync::Mutex;

use super::interface::{ProviderError, Translator};

/// Records every call and answers with a fixed translation or failure
pub struct MockTranslator {
    outcome: Result<String, String>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl MockTranslator {
    pub fn returning(translation: &str) -> Self {
        Self {
            outcome: Ok(translation.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));
        self.outcome.clone().map_err(ProviderError::Rejected)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
