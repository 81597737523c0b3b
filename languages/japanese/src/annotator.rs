use nihongo_core::{Classification, Span};
use serde::Serialize;

use crate::dictionary::DictionaryEntry;
use crate::grammar::GrammarMatch;
use crate::katakana::KatakanaSpan;
use crate::script::is_katakana;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    KanjiOrVocab,
    Katakana,
    Grammar,
    Plain,
}

pub type AnnotatedSpan = Span<Category>;

/// Classify every code point of `text`. Passes run grammar, katakana, then
/// dictionary keys, each overwriting the one before. `ref_index` of each span
/// points into the list its category came from.
pub fn annotate(
    text: &str,
    dictionary_hits: &[DictionaryEntry],
    katakana: &[KatakanaSpan],
    grammar: &[GrammarMatch],
) -> Vec<AnnotatedSpan> {
    let chars: Vec<char> = text.chars().collect();
    let mut classification = Classification::new(chars.len(), Category::Plain);

    for (idx, m) in grammar.iter().enumerate() {
        classification.paint(m.start_position..m.end_position, Category::Grammar, idx);
    }

    for (idx, span) in katakana.iter().enumerate() {
        classification.paint(
            span.start_position..span.end_position,
            Category::Katakana,
            idx,
        );
    }

    for (idx, entry) in dictionary_hits.iter().enumerate() {
        let key: Vec<char> = entry.key.chars().collect();
        let single_katakana = matches!(key.as_slice(), [c] if is_katakana(*c));

        for start in occurrences(&chars, &key) {
            // A lone katakana key inside a longer word is not a hit
            if single_katakana && touches_katakana(&chars, start) {
                continue;
            }
            classification.paint(start..start + key.len(), Category::KanjiOrVocab, idx);
        }
    }

    classification.into_spans()
}

/// Every start position of `needle`, overlapping ones included
fn occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }

    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..].starts_with(needle) {
            found.push(pos);
        }
        pos += 1;
    }
    found
}

fn touches_katakana(chars: &[char], position: usize) -> bool {
    let before = position
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .is_some_and(|&c| is_katakana(c));
    let after = chars.get(position + 1).is_some_and(|&c| is_katakana(c));
    before || after
}
