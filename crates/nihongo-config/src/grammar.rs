use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_context_radius() -> usize {
    15
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GrammarConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Code points of surrounding text kept on each side of a match
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            context_radius: default_context_radius(),
        }
    }
}
