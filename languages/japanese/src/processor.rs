use nihongo_config::Config;
use nihongo_core::{Direction, LanguageProcessor};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::annotator::{AnnotatedSpan, annotate};
use crate::dictionary::{DictionaryEntry, DictionaryIndex};
use crate::grammar::{GrammarMatch, GrammarPatternMatcher};
use crate::katakana::{KatakanaRomanizer, KatakanaSpan};

/// Everything known about one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_text: String,
    /// Japanese text the scans ran on: the input itself, or the best reverse match
    pub resolved_text: String,
    pub direction: Direction,
    pub translations: Vec<String>,
    pub dictionary_matches: Vec<DictionaryEntry>,
    pub grammar_matches: Vec<GrammarMatch>,
    pub katakana_spans: Vec<KatakanaSpan>,
    pub annotated_spans: Vec<AnnotatedSpan>,
}

/// Japanese language processor
pub struct JapaneseProcessor {
    dictionary: DictionaryIndex,
    grammar: GrammarPatternMatcher,
    romanizer: KatakanaRomanizer,
    grammar_enabled: bool,
}

impl JapaneseProcessor {
    pub fn new(
        dictionary: DictionaryIndex,
        grammar: GrammarPatternMatcher,
        romanizer: KatakanaRomanizer,
    ) -> Self {
        Self {
            dictionary,
            grammar,
            romanizer,
            grammar_enabled: true,
        }
    }

    /// Processor over `dictionary` with the built-in rule and kana tables
    pub fn with_dictionary(dictionary: DictionaryIndex) -> Self {
        Self::new(
            dictionary,
            GrammarPatternMatcher::with_defaults(),
            KatakanaRomanizer::with_defaults(),
        )
    }

    /// Apply the dictionary and grammar sections of `config`. The dataset
    /// itself is loaded by the caller.
    pub fn from_config(config: &Config, dictionary: DictionaryIndex) -> Self {
        let dictionary = if config.dictionary.enabled {
            dictionary.with_max_reverse_matches(config.dictionary.max_reverse_matches)
        } else {
            tracing::info!("Dictionary disabled; lookups will not match");
            DictionaryIndex::new()
        };

        let grammar =
            GrammarPatternMatcher::with_defaults().with_context_radius(config.grammar.context_radius);

        Self {
            grammar_enabled: config.grammar.enabled,
            ..Self::new(dictionary, grammar, KatakanaRomanizer::with_defaults())
        }
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }
}

impl LanguageProcessor for JapaneseProcessor {
    type Analysis = AnalysisResult;

    fn normalize(&self, text: &str) -> String {
        text.nfkc()
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace() || *c == ' ')
            .collect()
    }

    fn analyze(&self, text: &str) -> AnalysisResult {
        let (direction, resolved_text, translations, dictionary_matches) =
            if DictionaryIndex::is_japanese(text) {
                let forward = self.dictionary.lookup_forward(text);
                (
                    Direction::JpToPt,
                    forward.resolved_text,
                    forward.translations,
                    forward.breakdown,
                )
            } else {
                let reverse = self.dictionary.reverse_search(text);
                let translations = reverse.translations();
                let entries = reverse.matches.into_iter().map(|m| m.entry).collect();
                (Direction::PtToJp, reverse.resolved_text, translations, entries)
            };

        let grammar_matches = if self.grammar_enabled {
            self.grammar.scan(&resolved_text)
        } else {
            vec![]
        };
        let katakana_spans = self.romanizer.segment(&resolved_text);
        let annotated_spans = annotate(
            &resolved_text,
            &dictionary_matches,
            &katakana_spans,
            &grammar_matches,
        );

        tracing::debug!(
            "Analyzed '{}' ({}): {} entries, {} grammar, {} katakana",
            text,
            direction.as_str(),
            dictionary_matches.len(),
            grammar_matches.len(),
            katakana_spans.len()
        );

        AnalysisResult {
            original_text: text.to_string(),
            resolved_text,
            direction,
            translations,
            dictionary_matches,
            grammar_matches,
            katakana_spans,
            annotated_spans,
        }
    }
}
