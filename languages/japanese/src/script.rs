pub const LONG_VOWEL_MARK: char = 'ー';
pub const SOKUON: char = 'ッ';
pub const INTERPUNCT: char = '・';

#[must_use]
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Katakana block, including `ー` and `・`
#[must_use]
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs
#[must_use]
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

#[must_use]
pub fn is_japanese_char(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c)
}

/// True if at least one code point is kana or kanji
#[must_use]
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}
