use nihongo_core::{Direction, LanguageProcessor};
use nihongo_lang_japanese::{
    Category, DatasetLoader, DictionaryIndex, JapaneseProcessor, annotate,
};
use proptest::prelude::*;

const FIXTURE: &str = r#"{
    "私": { "ptbr": "eu", "meanings": ["eu"], "on": ["シ"], "jlpt": 5 },
    "名前": { "description": "nome", "kun": ["なまえ"] },
    "ありがとう": { "ptbr": "obrigado", "meanings": ["obrigado", "obrigada"] },
    "どうも": { "meanings": ["obrigado (informal)"] },
    "ロ": { "ptbr": "boca" }
}"#;

fn fixture_processor() -> JapaneseProcessor {
    let dict = DictionaryIndex::from_json(FIXTURE).unwrap();
    JapaneseProcessor::with_dictionary(dict)
}

fn embedded_processor() -> JapaneseProcessor {
    JapaneseProcessor::with_dictionary(DatasetLoader::load_embedded().unwrap())
}

#[test]
fn test_japanese_sentence() {
    let result = embedded_processor().analyze("私の名前はヨーコです");

    assert_eq!(result.direction, Direction::JpToPt);
    assert_eq!(result.resolved_text, "私の名前はヨーコです");
    assert!(result.dictionary_matches.iter().any(|e| e.key == "私"));

    let grammar: Vec<&str> = result.grammar_matches.iter().map(|m| m.text.as_str()).collect();
    assert!(grammar.contains(&"は"));
    assert!(grammar.contains(&"です"));

    assert_eq!(result.katakana_spans.len(), 1);
    assert_eq!(result.katakana_spans[0].text, "ヨーコ");
    assert!(!result.katakana_spans[0].romanized.is_empty());

    assert_eq!(result.annotated_spans.first().map(|s| s.category), Some(Category::KanjiOrVocab));
}

#[test]
fn test_query_resolves_to_best_key() {
    let result = fixture_processor().analyze("obrigado");

    assert_eq!(result.direction, Direction::PtToJp);
    assert_eq!(result.resolved_text, "ありがとう");
    assert_eq!(result.translations, vec!["ありがとう", "どうも"]);
    assert_eq!(result.annotated_spans.len(), 1);
    assert_eq!(result.annotated_spans[0].category, Category::KanjiOrVocab);
}

#[test]
fn test_unknown_query() {
    let result = fixture_processor().analyze("bicicleta");
    assert_eq!(result.resolved_text, "???");
    assert!(result.dictionary_matches.is_empty());
    assert_eq!(result.translations, vec!["???"]);
}

#[test]
fn test_empty_input() {
    let result = fixture_processor().analyze("");
    assert_eq!(result.direction, Direction::PtToJp);
    assert_eq!(result.resolved_text, "???");
    assert!(result.grammar_matches.is_empty());
}

#[test]
fn test_json_shape() {
    let result = fixture_processor().analyze("私の名前はヨーコです");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["direction"], "JP_TO_PT");
    assert_eq!(value["originalText"], "私の名前はヨーコです");
    assert_eq!(value["katakanaSpans"][0]["startPosition"], 5);
    assert_eq!(value["grammarMatches"][0]["level"], "N5");
    assert_eq!(value["annotatedSpans"][0]["category"], "kanjiOrVocab");
    assert_eq!(value["dictionaryMatches"][0]["onReadings"][0], "シ");
}

#[test]
fn test_analysis_is_idempotent() {
    let processor = embedded_processor();
    for text in ["私の名前はヨーコです", "obrigado", "コーヒーを飲みたい", ""] {
        let first = serde_json::to_string(&processor.analyze(text)).unwrap();
        let second = serde_json::to_string(&processor.analyze(text)).unwrap();
        assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn grammar_matches_never_overlap(text in "[はがのでですますしかないてくださいまで私猫ヨーコ]{0,40}") {
        let result = fixture_processor().analyze(&text);
        for pair in result.grammar_matches.windows(2) {
            prop_assert!(pair[0].end_position <= pair[1].start_position);
        }
    }

    #[test]
    fn annotation_partitions_any_text(text in "\\PC{0,32}") {
        let processor = fixture_processor();
        let result = processor.analyze(&text);
        let len = result.resolved_text.chars().count();

        let mut cursor = 0;
        for span in &result.annotated_spans {
            prop_assert_eq!(span.start, cursor);
            prop_assert!(span.end > span.start);
            cursor = span.end;
        }
        prop_assert_eq!(cursor, len);

        let again = annotate(
            &result.resolved_text,
            &result.dictionary_matches,
            &result.katakana_spans,
            &result.grammar_matches,
        );
        prop_assert_eq!(again, result.annotated_spans);
    }
}
