use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default cleanup for captured text (OCR, clipboard, selections)
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Captured text often wraps mid-sentence
        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Fold text for case and width insensitive comparison.
///
/// NFKC maps full-width Latin and half-width kana onto their canonical
/// forms, lowercasing then removes case.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_trims_and_joins_lines() {
        let text = DefaultPreprocessor.process("  私の\n名前は\r\nヨーコです  ");
        assert_eq!(text, "私の名前はヨーコです");
    }

    #[test]
    fn test_process_normalizes_half_width_katakana() {
        assert_eq!(DefaultPreprocessor.process("ﾖｰｺ"), "ヨーコ");
    }

    #[test]
    fn test_process_empty() {
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }

    #[test]
    fn test_fold_ignores_case_and_width() {
        assert_eq!(fold("Obrigado"), "obrigado");
        assert_eq!(fold("ＯＢＲＩＧＡＤＯ"), "obrigado");
        assert_eq!(fold("obrigado"), fold("OBRIGADO"));
    }
}
