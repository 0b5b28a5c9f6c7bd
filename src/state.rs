use std::sync::Arc;
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::translate::{Translator, TranslatorFactory};

/// Read-only state shared by all requests
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn Translator>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create(&config.translator_config)?;
        Ok(Self::with_translator(translator))
    }

    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            started_at: Utc::now(),
        }
    }
}
