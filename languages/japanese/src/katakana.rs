use std::collections::HashMap;

use serde::Serialize;

use crate::script::{INTERPUNCT, LONG_VOWEL_MARK, SOKUON, is_katakana};

#[rustfmt::skip]
const SINGLES: &[(char, &str)] = &[
    ('ア', "a"), ('イ', "i"), ('ウ', "u"), ('エ', "e"), ('オ', "o"),
    ('カ', "ka"), ('キ', "ki"), ('ク', "ku"), ('ケ', "ke"), ('コ', "ko"),
    ('サ', "sa"), ('シ', "shi"), ('ス', "su"), ('セ', "se"), ('ソ', "so"),
    ('タ', "ta"), ('チ', "chi"), ('ツ', "tsu"), ('テ', "te"), ('ト', "to"),
    ('ナ', "na"), ('ニ', "ni"), ('ヌ', "nu"), ('ネ', "ne"), ('ノ', "no"),
    ('ハ', "ha"), ('ヒ', "hi"), ('フ', "fu"), ('ヘ', "he"), ('ホ', "ho"),
    ('マ', "ma"), ('ミ', "mi"), ('ム', "mu"), ('メ', "me"), ('モ', "mo"),
    ('ヤ', "ya"), ('ユ', "yu"), ('ヨ', "yo"),
    ('ラ', "ra"), ('リ', "ri"), ('ル', "ru"), ('レ', "re"), ('ロ', "ro"),
    ('ワ', "wa"), ('ヲ', "wo"), ('ン', "n"),
    ('ガ', "ga"), ('ギ', "gi"), ('グ', "gu"), ('ゲ', "ge"), ('ゴ', "go"),
    ('ザ', "za"), ('ジ', "ji"), ('ズ', "zu"), ('ゼ', "ze"), ('ゾ', "zo"),
    ('ダ', "da"), ('ヂ', "ji"), ('ヅ', "zu"), ('デ', "de"), ('ド', "do"),
    ('バ', "ba"), ('ビ', "bi"), ('ブ', "bu"), ('ベ', "be"), ('ボ', "bo"),
    ('パ', "pa"), ('ピ', "pi"), ('プ', "pu"), ('ペ', "pe"), ('ポ', "po"),
    ('ヴ', "vu"),
];

// Yoon and foreign-sound combinations
#[rustfmt::skip]
const DIGRAPHS: &[(&str, &str)] = &[
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
    ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
    ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
    ("シェ", "she"), ("チェ", "che"), ("ツァ", "tsa"), ("ツェ", "tse"), ("ツォ", "tso"),
    ("ティ", "ti"), ("ディ", "di"), ("デュ", "dyu"),
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"),
    ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"),
];

/// Contiguous katakana run found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KatakanaSpan {
    pub text: String,
    pub romanized: String,
    /// Code point index of the first character
    pub start_position: usize,
    pub end_position: usize,
}

pub struct KatakanaRomanizer {
    singles: HashMap<char, &'static str>,
    digraphs: HashMap<(char, char), &'static str>,
}

impl Default for KatakanaRomanizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KatakanaRomanizer {
    /// Romanizer with the built-in Hepburn-style tables
    pub fn with_defaults() -> Self {
        let singles = SINGLES.iter().copied().collect();

        let digraphs = DIGRAPHS
            .iter()
            .filter_map(|(kana, romaji)| {
                let mut chars = kana.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Some(((a, b), *romaji)),
                    _ => None,
                }
            })
            .collect();

        Self { singles, digraphs }
    }

    fn digraph_at(&self, chars: &[char], i: usize) -> Option<&'static str> {
        let a = *chars.get(i)?;
        let b = *chars.get(i + 1)?;
        self.digraphs.get(&(a, b)).copied()
    }

    /// Next resolvable unit starting at `i`: digraph first, then single
    fn unit_at(&self, chars: &[char], i: usize) -> Option<&'static str> {
        self.digraph_at(chars, i)
            .or_else(|| chars.get(i).and_then(|c| self.singles.get(c).copied()))
    }

    /// Left to right: a digraph always wins, `ッ` doubles the first letter of
    /// the next unit, `ー` becomes `-`, unmapped characters are copied through
    pub fn romanize(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut romaji = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            if let Some(romanized) = self.digraph_at(&chars, i) {
                romaji.push_str(romanized);
                i += 2;
                continue;
            }

            match chars[i] {
                SOKUON => {
                    // Only the doubled consonant; the next unit is read on the next step
                    if let Some(first) = self.unit_at(&chars, i + 1).and_then(|r| r.chars().next()) {
                        romaji.push(first);
                    }
                }
                LONG_VOWEL_MARK => romaji.push('-'),
                c => match self.singles.get(&c) {
                    Some(romanized) => romaji.push_str(romanized),
                    None => romaji.push(c),
                },
            }
            i += 1;
        }

        romaji
    }

    /// Maximal katakana runs, each romanized. Runs made only of `ー` or
    /// `・` are dropped.
    pub fn segment(&self, text: &str) -> Vec<KatakanaSpan> {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if !is_katakana(chars[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < chars.len() && is_katakana(chars[i]) {
                i += 1;
            }

            let run = &chars[start..i];
            if run.iter().all(|&c| c == LONG_VOWEL_MARK || c == INTERPUNCT) {
                continue;
            }

            let text: String = run.iter().collect();
            spans.push(KatakanaSpan {
                romanized: self.romanize(&text),
                text,
                start_position: start,
                end_position: i,
            });
        }

        spans
    }
}
