use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_max_reverse_matches() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base dataset; the embedded one is used when unset
    #[serde(default)]
    pub dataset_path: Option<String>,
    /// Merged over the base dataset in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Entries kept by a reverse search
    #[serde(default = "default_max_reverse_matches")]
    pub max_reverse_matches: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dataset_path: None,
            additional_paths: vec![],
            max_reverse_matches: default_max_reverse_matches(),
        }
    }
}
