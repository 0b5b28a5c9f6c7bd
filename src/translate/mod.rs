pub mod interface;
pub mod google;
pub mod service;
pub mod factory;

pub use interface::{ProviderError, Translator};
pub use factory::TranslatorFactory;

#[cfg(test)]
pub mod mock;
