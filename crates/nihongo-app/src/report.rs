use std::collections::HashSet;

use nihongo_config::output::OutputFormat;
use nihongo_core::Direction;
use nihongo_lang_japanese::{
    AnalysisResult, AnnotatedSpan, Category, DictionaryEntry, GrammarRule, JlptLevel,
    group_by_level,
};

pub fn render(result: &AnalysisResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_text(result: &AnalysisResult) -> String {
    let mut lines = Vec::new();

    match result.direction {
        Direction::JpToPt => lines.push(format!(
            "{} [{}]",
            result.original_text,
            result.direction.label()
        )),
        Direction::PtToJp => lines.push(format!(
            "\"{}\" → {} [{}]",
            result.original_text,
            result.resolved_text,
            result.direction.label()
        )),
    }

    lines.push("Tradução:".to_string());
    lines.extend(result.translations.iter().map(|t| format!("  {t}")));

    if !result.annotated_spans.is_empty() {
        lines.push(format!(
            "Destaques: {}",
            highlight(&result.resolved_text, &result.annotated_spans)
        ));
    }

    if !result.grammar_matches.is_empty() {
        lines.push("Gramática:".to_string());
        for (level, matches) in group_by_level(&result.grammar_matches) {
            lines.push(format!("  {}", level.description()));
            for m in matches {
                if m.pattern == m.text {
                    lines.push(format!("    {}  {}", m.text, m.description));
                } else {
                    lines.push(format!("    {} ({})  {}", m.text, m.pattern, m.description));
                }
            }
        }
    }

    if !result.katakana_spans.is_empty() {
        lines.push("Katakana:".to_string());
        for span in &result.katakana_spans {
            lines.push(format!("  {} → {}", span.text, span.romanized));
        }
    }

    if !result.dictionary_matches.is_empty() {
        lines.push("Dicionário:".to_string());
        let mut seen = HashSet::new();
        for entry in &result.dictionary_matches {
            if seen.insert(entry.key.as_str()) {
                lines.extend(entry_card(entry, &result.resolved_text));
            }
        }
    }

    lines.join("\n")
}

fn entry_card(entry: &DictionaryEntry, text: &str) -> Vec<String> {
    let mut card = vec![format!("  {}  {}", entry.key, entry.gloss())];

    let reading = entry.reading();
    if !reading.is_empty() {
        card.push(format!("    Leitura: {reading}"));
    }

    match (entry.jlpt(), entry.stroke_count) {
        (Some(level), Some(strokes)) => card.push(format!("    JLPT {level} · {strokes} traços")),
        (Some(level), None) => card.push(format!("    JLPT {level}")),
        (None, Some(strokes)) => card.push(format!("    {strokes} traços")),
        (None, None) => {}
    }

    if let Some(variant) = entry.preferred_variant(text) {
        card.push(format!("    {}: {}", variant.surface, variant.gloss));
    }

    card
}

/// Inline markup of the annotation: `[vocab]`, `<grammar>`, `{katakana}`
pub fn highlight(text: &str, spans: &[AnnotatedSpan]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);

    for span in spans {
        let Some(slice) = chars.get(span.range()) else {
            continue;
        };
        let (open, close) = match span.category {
            Category::KanjiOrVocab => ("[", "]"),
            Category::Grammar => ("<", ">"),
            Category::Katakana => ("{", "}"),
            Category::Plain => ("", ""),
        };
        out.push_str(open);
        out.extend(slice.iter());
        out.push_str(close);
    }

    out
}

/// Rule table listing, grouped by level
pub fn render_rules(rules: &[GrammarRule], level: Option<JlptLevel>) -> String {
    let mut lines = Vec::new();

    for current in JlptLevel::ALL {
        if level.is_some_and(|l| l != current) {
            continue;
        }

        let group: Vec<&GrammarRule> = rules.iter().filter(|r| r.level == current).collect();
        if group.is_empty() {
            continue;
        }

        lines.push(format!("{} ({} padrões)", current.description(), group.len()));
        for rule in group {
            lines.push(format!("  {}  {}", rule.pattern(), rule.description));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use nihongo_core::LanguageProcessor;
    use nihongo_lang_japanese::{DictionaryIndex, GrammarPatternMatcher, JapaneseProcessor};

    use super::*;

    const FIXTURE: &str = r#"{
        "私": { "ptbr": "eu", "on": ["シ"], "kun": ["わたし"], "jlpt": 5, "strokes": 7 },
        "名": { "ptbr": "nome", "jlpt": 5, "variants": { "有名": "famoso", "名前": "nome" } },
        "ありがとう": { "ptbr": "obrigado" }
    }"#;

    fn analyze(text: &str) -> AnalysisResult {
        let dict = DictionaryIndex::from_json(FIXTURE).unwrap();
        JapaneseProcessor::with_dictionary(dict).analyze(text)
    }

    #[test]
    fn test_text_report_sections() {
        let report = render_text(&analyze("私の名前はヨーコです"));

        assert!(report.starts_with("私の名前はヨーコです [Japonês → Português]"));
        assert!(report.contains("  私: eu"));
        assert!(report.contains("Destaques: [私]<の>[名]前<は>{ヨーコ}<です>"));
        assert!(report.contains("  N5 (Beginner)"));
        assert!(report.contains("  ヨーコ → yo-ko"));
        assert!(report.contains("    Leitura: シ"));
        assert!(report.contains("    JLPT N5 · 7 traços"));
        assert!(report.contains("    名前: nome"));
    }

    #[test]
    fn test_reverse_report_header() {
        let report = render_text(&analyze("obrigado"));
        assert!(report.starts_with("\"obrigado\" → ありがとう [Português → Japonês]"));
        // The resolved text is scanned too: が and と are particles there
        assert!(report.contains("Gramática:"));
        assert!(report.contains("    が  Partícula 'ga'"));
        assert!(report.contains("    と  Partícula 'e' ou 'com'"));
        assert!(report.contains("Destaques: [ありがとう]"));
    }

    #[test]
    fn test_json_report() {
        let json = render(&analyze("obrigado"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["direction"], "PT_TO_JP");
        assert_eq!(value["resolvedText"], "ありがとう");
    }

    #[test]
    fn test_repeated_entries_get_one_card() {
        let report = render_text(&analyze("私と私"));
        assert_eq!(report.matches("Leitura: シ").count(), 1);
    }

    #[test]
    fn test_rules_listing_filters_level() {
        let matcher = GrammarPatternMatcher::with_defaults();
        let all = render_rules(matcher.rules(), None);
        assert!(all.contains("N5 (Beginner)"));
        assert!(all.contains("N1 (Advanced)"));
        assert!(all.contains("  しか…ない  Nada além de"));

        let n3 = render_rules(matcher.rules(), Some(JlptLevel::N3));
        assert!(n3.starts_with("N3 (Intermediate)"));
        assert!(!n3.contains("N5"));
    }
}
