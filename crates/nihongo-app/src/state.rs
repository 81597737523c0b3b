use std::sync::Arc;

use nihongo_config::Config;
use nihongo_core::DefaultPreprocessor;
use nihongo_lang_japanese::JapaneseProcessor;

use crate::dataset::load_dictionary;

/// Shared by every task. Config is read-only once loaded.
pub struct AppState {
    pub config: Arc<Config>,
    pub processor: Arc<JapaneseProcessor>,
    pub preprocessor: DefaultPreprocessor,
}

impl AppState {
    pub fn new(config: Config, processor: JapaneseProcessor) -> Self {
        Self {
            config: Arc::new(config),
            processor: Arc::new(processor),
            preprocessor: DefaultPreprocessor,
        }
    }

    /// Read the configured datasets and build the processor over them
    pub async fn load(config: Config) -> anyhow::Result<Self> {
        let dictionary = load_dictionary(&config.dictionary).await?;
        let processor = JapaneseProcessor::from_config(&config, dictionary);
        Ok(Self::new(config, processor))
    }
}
