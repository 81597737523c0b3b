/// Text analysis interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Structured result of a single analysis call
    type Analysis;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Analyze raw text. Never fails: an empty or unknown input still
    /// produces a well-formed analysis.
    fn analyze(&self, text: &str) -> Self::Analysis;
}

/// Direction of a lookup, decided by script detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Japanese input, looked up in the dictionary
    JpToPt,
    /// Query-language input, reverse searched in the glosses
    PtToJp,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::JpToPt => "JP_TO_PT",
            Direction::PtToJp => "PT_TO_JP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::JpToPt => "Japonês → Português",
            Direction::PtToJp => "Português → Japonês",
        }
    }
}
