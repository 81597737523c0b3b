use std::collections::HashMap;

use nihongo_core::LoadError;
use nihongo_core::preprocess::fold;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::jlpt::JlptLevel;
use crate::script;

/// Resolved text of a reverse search that found nothing
pub const NO_MATCH: &str = "???";
/// Gloss shown for an entry without description or meanings
pub const NO_DEFINITION: &str = "Sem definição";
/// Translation line when no character of the text is in the dictionary
pub const NO_DIRECT_MATCH: &str = "Tradução direta não encontrada no dicionário.";

pub const DEFAULT_MAX_REVERSE_MATCHES: usize = 3;

const EXACT_DESCRIPTION_SCORE: u32 = 10;
const PARTIAL_DESCRIPTION_SCORE: u32 = 5;
const MEANING_SCORE: u32 = 2;

/// Alternate surface form of an entry (usually a compound using the kanji)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub surface: String,
    pub gloss: String,
}

/// Dictionary entry. Optional dataset fields that are missing or malformed
/// are `None` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meanings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub on_readings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kun_readings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_count: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl DictionaryEntry {
    /// Bare entry with no optional fields
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: None,
            meanings: vec![],
            on_readings: vec![],
            kun_readings: vec![],
            jlpt_level: None,
            stroke_count: None,
            variants: vec![],
        }
    }

    /// Build an entry from a dataset record. Accepts both the canonical
    /// field names and the legacy ones (`ptbr`, `on`, `kun`, `jlpt`,
    /// `strokes`). Returns `None` if the record is not an object.
    pub fn from_value(key: &str, value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let description = match field(record, &["description", "ptbr"]) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                tracing::debug!("Ignoring non-string description for {}: {}", key, other);
                None
            }
            None => None,
        };

        Some(Self {
            key: key.to_string(),
            description,
            meanings: string_list(field(record, &["meanings"])),
            on_readings: string_list(field(record, &["onReadings", "on"])),
            kun_readings: string_list(field(record, &["kunReadings", "kun"])),
            jlpt_level: field(record, &["jlptLevel", "jlpt"]).and_then(jlpt_number),
            stroke_count: field(record, &["strokeCount", "strokes"])
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            variants: variants(field(record, &["variants"])),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_meanings<I, S>(mut self, meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meanings = meanings.into_iter().map(Into::into).collect();
        self
    }

    /// Full gloss: description, else all meanings, else a fallback
    pub fn gloss(&self) -> String {
        match (&self.description, self.meanings.is_empty()) {
            (Some(description), _) => description.clone(),
            (None, false) => self.meanings.join("; "),
            (None, true) => NO_DEFINITION.to_string(),
        }
    }

    /// Description or first meaning
    pub fn short_gloss(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.meanings.first().map(String::as_str))
    }

    /// On-readings, else kun-readings, comma separated
    pub fn reading(&self) -> String {
        if !self.on_readings.is_empty() {
            self.on_readings.join(", ")
        } else {
            self.kun_readings.join(", ")
        }
    }

    pub fn jlpt(&self) -> Option<JlptLevel> {
        self.jlpt_level.and_then(JlptLevel::from_number)
    }

    /// Variant to show for `text`: the first one that appears in the text,
    /// otherwise the first declared
    pub fn preferred_variant(&self, text: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| !v.surface.is_empty() && text.contains(v.surface.as_str()))
            .or_else(|| self.variants.first())
    }
}

fn field<'a>(record: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| record.get(*name))
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(text)) => vec![text.clone()],
        _ => vec![],
    }
}

fn jlpt_number(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.parse::<JlptLevel>().ok().map(|level| level.number()),
        _ => None,
    }
}

fn variants(value: Option<&Value>) -> Vec<Variant> {
    let Some(Value::Object(map)) = value else {
        return vec![];
    };

    map.iter()
        .filter_map(|(surface, gloss)| {
            gloss.as_str().map(|gloss| Variant {
                surface: surface.clone(),
                gloss: gloss.to_string(),
            })
        })
        .collect()
}

/// Folded glosses kept next to each entry for reverse search
#[derive(Debug, Clone)]
struct SearchKey {
    description: Option<String>,
    meanings: Vec<String>,
}

impl SearchKey {
    fn new(entry: &DictionaryEntry) -> Self {
        Self {
            description: entry.description.as_deref().map(fold),
            meanings: entry.meanings.iter().map(|m| fold(m)).collect(),
        }
    }

    fn score(&self, needle: &str) -> u32 {
        let mut score = 0;

        if let Some(description) = &self.description {
            if description == needle {
                score += EXACT_DESCRIPTION_SCORE;
            } else if description.contains(needle) {
                score += PARTIAL_DESCRIPTION_SCORE;
            }
        }

        let hits = self.meanings.iter().filter(|m| m.contains(needle)).count() as u32;
        score + hits * MEANING_SCORE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardLookup {
    pub resolved_text: String,
    pub breakdown: Vec<DictionaryEntry>,
    pub translations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseSearchMatch {
    pub key: String,
    pub entry: DictionaryEntry,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseLookup {
    pub resolved_text: String,
    pub matches: Vec<ReverseSearchMatch>,
}

impl ReverseLookup {
    fn empty() -> Self {
        Self {
            resolved_text: NO_MATCH.to_string(),
            matches: vec![],
        }
    }

    /// Matched keys, best first, or the no-match token
    pub fn translations(&self) -> Vec<String> {
        if self.matches.is_empty() {
            return vec![NO_MATCH.to_string()];
        }
        self.matches.iter().map(|m| m.key.clone()).collect()
    }
}

/// In-memory dictionary keyed by Japanese headword. Keeps dataset order,
/// which breaks ties in reverse search.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    entries: Vec<DictionaryEntry>,
    search_keys: Vec<SearchKey>,
    key_index: HashMap<String, usize>,
    max_reverse_matches: usize,
}

impl Default for DictionaryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            search_keys: Vec::new(),
            key_index: HashMap::new(),
            max_reverse_matches: DEFAULT_MAX_REVERSE_MATCHES,
        }
    }

    /// Load from a JSON object mapping keys to records
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: Value = serde_json::from_str(json_str)?;
        let Value::Object(records) = data else {
            return Err(LoadError::InvalidFormat(
                "dataset root must be an object of key → entry".to_string(),
            ));
        };

        let mut index = Self::new();
        let mut skipped = 0usize;

        for (key, value) in &records {
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            match DictionaryEntry::from_value(key, value) {
                Some(entry) => index.insert(entry),
                None => {
                    tracing::warn!("Skipping malformed dictionary entry: {}", key);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} dictionary entries", skipped);
        }

        Ok(index)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    pub fn with_max_reverse_matches(mut self, max: usize) -> Self {
        self.max_reverse_matches = max;
        self
    }

    /// Add an entry; an existing key is replaced in place
    pub fn insert(&mut self, entry: DictionaryEntry) {
        let search_key = SearchKey::new(&entry);
        match self.key_index.get(&entry.key) {
            Some(&idx) => {
                self.entries[idx] = entry;
                self.search_keys[idx] = search_key;
            }
            None => {
                self.key_index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                self.search_keys.push(search_key);
            }
        }
    }

    /// Merge another dictionary into this one.
    /// Keys from `other` override existing ones without moving them.
    pub fn merge(mut self, other: DictionaryIndex) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn lookup_exact(&self, key: &str) -> Option<&DictionaryEntry> {
        self.key_index.get(key).and_then(|&idx| self.entries.get(idx))
    }

    pub fn is_japanese(text: &str) -> bool {
        script::contains_japanese(text)
    }

    /// Japanese → gloss. Whole-text hit first, then a per-character
    /// breakdown in text order (repeats kept).
    pub fn lookup_forward(&self, text: &str) -> ForwardLookup {
        if let Some(entry) = self.lookup_exact(text) {
            return ForwardLookup {
                resolved_text: text.to_string(),
                breakdown: vec![entry.clone()],
                translations: vec![entry.gloss()],
            };
        }

        let mut breakdown = Vec::new();
        let mut translations = Vec::new();
        let mut buf = [0u8; 4];

        for c in text.chars() {
            if let Some(entry) = self.lookup_exact(c.encode_utf8(&mut buf)) {
                if let Some(gloss) = entry.short_gloss() {
                    translations.push(format!("{c}: {gloss}"));
                }
                breakdown.push(entry.clone());
            }
        }

        if translations.is_empty() {
            translations.push(NO_DIRECT_MATCH.to_string());
        }

        ForwardLookup {
            resolved_text: text.to_string(),
            breakdown,
            translations,
        }
    }

    /// Query-language gloss → Japanese, scored over every entry
    pub fn reverse_search(&self, query: &str) -> ReverseLookup {
        let folded = fold(query);
        let needle = folded.trim();
        if needle.is_empty() {
            return ReverseLookup::empty();
        }

        let mut scored: Vec<(usize, u32)> = self
            .search_keys
            .iter()
            .enumerate()
            .map(|(idx, key)| (idx, key.score(needle)))
            .filter(|&(_, score)| score > 0)
            .collect();

        // Stable: equal scores keep dataset order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(self.max_reverse_matches);

        let matches: Vec<ReverseSearchMatch> = scored
            .into_iter()
            .map(|(idx, score)| {
                let entry = self.entries[idx].clone();
                ReverseSearchMatch {
                    key: entry.key.clone(),
                    entry,
                    score,
                }
            })
            .collect();

        tracing::debug!("Reverse search '{}': {} matches", query, matches.len());

        match matches.first() {
            Some(best) => ReverseLookup {
                resolved_text: best.key.clone(),
                matches,
            },
            None => ReverseLookup::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIXTURE: &str = r#"{
        "私": { "ptbr": "eu", "meanings": ["eu", "privado"], "on": ["シ"], "kun": ["わたし"], "jlpt": 5, "strokes": 7 },
        "日": { "description": "dia", "meanings": ["sol", "dia"], "onReadings": ["ニチ", "ジツ"], "jlptLevel": 5,
                "variants": { "日曜日": "domingo", "毎日": "todos os dias" } },
        "本": { "meanings": ["livro", "origem"], "kun": ["もと"] },
        "日本": { "description": "Japão" },
        "ありがとう": { "description": "Obrigado" },
        "どうも": { "meanings": ["obrigado (informal)", "muito"] },
        "感謝": { "description": "gratidão, muito obrigado", "meanings": ["obrigado"] },
        "壊": { "description": 42, "meanings": ["quebrar", 7] },
        "変": "not an object"
    }"#;

    fn fixture() -> DictionaryIndex {
        DictionaryIndex::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn test_load_skips_non_object_records() {
        let dict = fixture();
        assert_eq!(dict.entry_count(), 8);
        assert!(dict.lookup_exact("変").is_none());
    }

    #[test]
    fn test_legacy_and_canonical_fields() {
        let dict = fixture();

        let watashi = dict.lookup_exact("私").unwrap();
        assert_eq!(watashi.description.as_deref(), Some("eu"));
        assert_eq!(watashi.on_readings, vec!["シ"]);
        assert_eq!(watashi.kun_readings, vec!["わたし"]);
        assert_eq!(watashi.jlpt(), Some(JlptLevel::N5));
        assert_eq!(watashi.stroke_count, Some(7));

        let hi = dict.lookup_exact("日").unwrap();
        assert_eq!(hi.on_readings, vec!["ニチ", "ジツ"]);
        assert_eq!(hi.variants.len(), 2);
        assert_eq!(hi.variants[0].surface, "日曜日");
    }

    #[test]
    fn test_malformed_fields_are_dropped() {
        let dict = fixture();
        let entry = dict.lookup_exact("壊").unwrap();
        assert_eq!(entry.description, None);
        assert_eq!(entry.meanings, vec!["quebrar"]);
    }

    #[test]
    fn test_invalid_root() {
        assert!(matches!(
            DictionaryIndex::from_json("[1, 2]"),
            Err(LoadError::InvalidFormat(_))
        ));
        assert!(matches!(
            DictionaryIndex::from_json("{"),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn test_is_japanese() {
        assert!(DictionaryIndex::is_japanese("日本"));
        assert!(DictionaryIndex::is_japanese("abc ひらがな"));
        assert!(!DictionaryIndex::is_japanese("obrigado"));
    }

    #[test]
    fn test_forward_whole_key() {
        let result = fixture().lookup_forward("日本");
        assert_eq!(result.resolved_text, "日本");
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].key, "日本");
        assert_eq!(result.translations, vec!["Japão"]);
    }

    #[test]
    fn test_forward_breakdown_keeps_order_and_repeats() {
        let result = fixture().lookup_forward("本日の日");
        let keys: Vec<&str> = result.breakdown.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["本", "日", "日"]);
        assert_eq!(result.resolved_text, "本日の日");
        assert_eq!(result.translations[0], "本: livro");
        assert_eq!(result.translations[1], "日: dia");
    }

    #[test]
    fn test_forward_no_match() {
        let result = fixture().lookup_forward("カタカナ");
        assert!(result.breakdown.is_empty());
        assert_eq!(result.translations, vec![NO_DIRECT_MATCH]);

        let empty = fixture().lookup_forward("");
        assert!(empty.breakdown.is_empty());
    }

    #[test]
    fn test_reverse_exact_beats_containment() {
        let result = fixture().reverse_search("obrigado");
        let ranked: Vec<(&str, u32)> = result
            .matches
            .iter()
            .map(|m| (m.key.as_str(), m.score))
            .collect();
        // 感謝: description contains (5) + one meaning (2)
        assert_eq!(ranked, vec![("ありがとう", 10), ("感謝", 7), ("どうも", 2)]);
        assert_eq!(result.resolved_text, "ありがとう");
    }

    #[test]
    fn test_reverse_is_case_and_width_insensitive() {
        let dict = fixture();
        assert_eq!(dict.reverse_search("OBRIGADO").resolved_text, "ありがとう");
        assert_eq!(dict.reverse_search("ｏｂｒｉｇａｄｏ").resolved_text, "ありがとう");
    }

    #[test]
    fn test_reverse_meanings_are_additive() {
        let dict = DictionaryIndex::from_entries([
            DictionaryEntry::new("一").with_meanings(["um", "uma vez", "um só"]),
            DictionaryEntry::new("二").with_description("dois"),
        ]);
        let result = dict.reverse_search("um");
        assert_eq!(result.matches[0].score, 6);
    }

    #[test]
    fn test_reverse_ties_keep_dataset_order_and_truncate() {
        let dict = DictionaryIndex::from_entries([
            DictionaryEntry::new("A").with_meanings(["gato"]),
            DictionaryEntry::new("B").with_meanings(["gato"]),
            DictionaryEntry::new("C").with_meanings(["gato"]),
            DictionaryEntry::new("D").with_meanings(["gato"]),
            DictionaryEntry::new("E").with_description("gato"),
        ]);
        let result = dict.reverse_search("gato");
        let keys: Vec<&str> = result.matches.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["E", "A", "B"]);

        let wider = dict.with_max_reverse_matches(10).reverse_search("gato");
        assert_eq!(wider.matches.len(), 5);
    }

    #[test]
    fn test_reverse_no_match_and_empty_query() {
        let dict = fixture();

        let none = dict.reverse_search("xyzzy");
        assert!(none.matches.is_empty());
        assert_eq!(none.resolved_text, NO_MATCH);
        assert_eq!(none.translations(), vec![NO_MATCH]);

        let empty = dict.reverse_search("");
        assert!(empty.matches.is_empty());
        assert_eq!(empty.resolved_text, NO_MATCH);
    }

    #[test]
    fn test_reverse_blank_query_matches_nothing() {
        let dict = DictionaryIndex::from_entries([
            DictionaryEntry::new("日本語").with_description("língua japonesa"),
            DictionaryEntry::new("感謝").with_meanings(["muito obrigado"]),
        ]);

        for query in [" ", "  ", "\t", "\u{3000}"] {
            let result = dict.reverse_search(query);
            assert!(result.matches.is_empty(), "{query:?} matched");
            assert_eq!(result.resolved_text, NO_MATCH);
        }

        // Surrounding blanks do not change the needle
        assert_eq!(dict.reverse_search("  japonesa ").resolved_text, "日本語");
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let base = DictionaryIndex::from_entries([
            DictionaryEntry::new("猫").with_description("gato"),
            DictionaryEntry::new("犬").with_description("cão"),
        ]);
        let extra = DictionaryIndex::from_entries([
            DictionaryEntry::new("猫").with_description("gato doméstico"),
            DictionaryEntry::new("鳥").with_description("pássaro"),
        ]);

        let merged = base.merge(extra);
        let keys: Vec<&str> = merged.entries().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["猫", "犬", "鳥"]);
        assert_eq!(
            merged.lookup_exact("猫").and_then(|e| e.description.as_deref()),
            Some("gato doméstico")
        );
        assert_eq!(merged.reverse_search("doméstico").resolved_text, "猫");
    }

    #[test]
    fn test_gloss_fallbacks() {
        let dict = fixture();
        assert_eq!(dict.lookup_exact("私").unwrap().gloss(), "eu");
        assert_eq!(dict.lookup_exact("本").unwrap().gloss(), "livro; origem");
        assert_eq!(DictionaryEntry::new("空").gloss(), NO_DEFINITION);
        assert_eq!(dict.lookup_exact("本").unwrap().short_gloss(), Some("livro"));
    }

    #[test]
    fn test_reading_prefers_on() {
        let dict = fixture();
        assert_eq!(dict.lookup_exact("日").unwrap().reading(), "ニチ, ジツ");
        assert_eq!(dict.lookup_exact("本").unwrap().reading(), "もと");
        assert_eq!(dict.lookup_exact("日本").unwrap().reading(), "");
    }

    #[test]
    fn test_preferred_variant() {
        let dict = fixture();
        let hi = dict.lookup_exact("日").unwrap();

        let in_text = hi.preferred_variant("毎日勉強します").unwrap();
        assert_eq!(in_text.surface, "毎日");

        let fallback = hi.preferred_variant("日").unwrap();
        assert_eq!(fallback.surface, "日曜日");

        assert!(dict.lookup_exact("私").unwrap().preferred_variant("私").is_none());
    }

    fn gloss_sets() -> impl Strategy<Value = Vec<(Option<&'static str>, Vec<&'static str>)>> {
        let description = prop::option::of(prop::sample::select(vec![
            "gato",
            "Gato",
            "gato preto",
            "cão",
        ]));
        let meanings = prop::collection::vec(
            prop::sample::select(vec!["gato", "um gato", "peixe"]),
            0..4,
        );
        prop::collection::vec((description, meanings), 0..16)
    }

    proptest! {
        #[test]
        fn reverse_ranking_is_non_increasing_with_stable_ties(glosses in gloss_sets()) {
            // Zero padded keys sort in dataset order
            let dict = DictionaryIndex::from_entries(glosses.iter().enumerate().map(
                |(i, (description, meanings))| {
                    let entry = DictionaryEntry::new(format!("k{i:02}"))
                        .with_meanings(meanings.iter().copied());
                    match description {
                        Some(d) => entry.with_description(*d),
                        None => entry,
                    }
                },
            ))
            .with_max_reverse_matches(usize::MAX);

            let result = dict.reverse_search("gato");

            for pair in result.matches.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].key < pair[1].key);
                }
            }

            let expected = glosses
                .iter()
                .filter(|(d, m)| d.is_some_and(|d| d.to_lowercase().contains("gato"))
                    || m.iter().any(|m| m.contains("gato")))
                .count();
            prop_assert_eq!(result.matches.len(), expected);
            prop_assert!(result.matches.iter().all(|m| m.score > 0));
        }
    }
}
