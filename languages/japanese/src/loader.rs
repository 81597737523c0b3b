use nihongo_core::LoadError;

use crate::dictionary::DictionaryIndex;

pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset bundled with the crate
    pub fn load_embedded() -> Result<DictionaryIndex, LoadError> {
        let json = include_str!("../data/dictionary.json");
        tracing::info!("Loading embedded dictionary dataset...");
        let dict = DictionaryIndex::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (later keys override earlier ones)
    pub fn merge(base: DictionaryIndex, additional: DictionaryIndex) -> DictionaryIndex {
        tracing::info!(
            "Merging {} entries over {}",
            additional.entry_count(),
            base.entry_count()
        );
        base.merge(additional)
    }
}
