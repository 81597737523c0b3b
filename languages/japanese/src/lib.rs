pub mod annotator;
pub mod dictionary;
pub mod grammar;
pub mod jlpt;
pub mod katakana;
pub mod loader;
pub mod processor;
pub mod rules;
pub mod script;

pub use annotator::{AnnotatedSpan, Category, annotate};
pub use dictionary::{DictionaryEntry, DictionaryIndex, ForwardLookup, ReverseLookup, ReverseSearchMatch};
pub use grammar::{GrammarMatch, GrammarPatternMatcher, GrammarRule, group_by_level};
pub use jlpt::JlptLevel;
pub use katakana::{KatakanaRomanizer, KatakanaSpan};
pub use loader::DatasetLoader;
pub use processor::{AnalysisResult, JapaneseProcessor};
