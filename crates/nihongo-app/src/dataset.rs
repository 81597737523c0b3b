use std::path::Path;

use anyhow::Context;
use nihongo_config::dictionary::DictionaryConfig;
use nihongo_core::LoadError;
use nihongo_lang_japanese::{DatasetLoader, DictionaryIndex};

/// Base dataset (file or embedded) with the additional ones merged over it.
/// A broken base is fatal; a broken additional file is skipped.
pub async fn load_dictionary(config: &DictionaryConfig) -> anyhow::Result<DictionaryIndex> {
    if !config.enabled {
        return Ok(DictionaryIndex::new());
    }

    let mut dict = match &config.dataset_path {
        Some(path) => read_dataset(Path::new(path))
            .await
            .with_context(|| format!("Failed to load dataset {path}"))?,
        None => DatasetLoader::load_embedded()?,
    };

    for path in &config.additional_paths {
        match read_dataset(Path::new(path)).await {
            Ok(additional) => {
                tracing::info!("Merging additional dictionary from: {}", path);
                dict = DatasetLoader::merge(dict, additional);
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }

    tracing::info!("Dictionary ready with {} entries", dict.entry_count());
    Ok(dict)
}

async fn read_dataset(path: &Path) -> Result<DictionaryIndex, LoadError> {
    tracing::info!("Loading dictionary dataset from file: {}", path.display());
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::from_io(&path.display().to_string(), e))?;
    DictionaryIndex::from_json(&json)
}
