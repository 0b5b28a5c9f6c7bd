use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config::TranslatorConfig;
use super::google::GoogleTranslator;
use super::interface::Translator;
use super::service::ServiceTranslator;

/// Factory for creating translation backends
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create the translator selected by `translator_model`
    pub fn create(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
        info!("Initializing translator: {}", config.translator_model);

        match config.translator_model.as_str() {
            "google" => Ok(Arc::new(GoogleTranslator::new(&config.google))),
            "translation_service" => Ok(Arc::new(ServiceTranslator::new(
                config.translation_service.base_url.clone(),
            ))),
            other => anyhow::bail!(
                "Unknown translator_model '{}', expected 'google' or 'translation_service'",
                other
            ),
        }
    }
}
