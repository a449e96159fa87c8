// ============================================================================
// Character Normalisation
// Full-width folding and traditional-to-simplified mapping of numeral glyphs
// ============================================================================

use crate::interfaces::CharNormalizer;
use unicode_normalization::UnicodeNormalization;

/// Default character normalizer.
///
/// NFKC folds full-width digits and punctuation (`１２．５`) to half-width;
/// a small table then maps the traditional forms of numeral-related glyphs
/// to their simplified forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCharNormalizer;

impl StandardCharNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn simplify(ch: char) -> char {
        match ch {
            '萬' => '万',
            '億' => '亿',
            '兩' => '两',
            '貳' => '贰',
            '參' | '叄' => '叁',
            '陸' => '陆',
            '點' => '点',
            '負' => '负',
            '圓' => '圆',
            other => other,
        }
    }
}

impl CharNormalizer for StandardCharNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.nfkc().map(Self::simplify).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_folding() {
        let normalizer = StandardCharNormalizer::new();
        assert_eq!(normalizer.normalize("１２．５万"), "12.5万");
        assert_eq!(normalizer.normalize("－３"), "-3");
    }

    #[test]
    fn test_traditional_to_simplified() {
        let normalizer = StandardCharNormalizer::new();
        assert_eq!(normalizer.normalize("壹萬貳仟"), "壹万贰仟");
        assert_eq!(normalizer.normalize("負三點五"), "负三点五");
        assert_eq!(normalizer.normalize("兩億"), "两亿");
    }

    #[test]
    fn test_simplified_untouched() {
        let normalizer = StandardCharNormalizer::new();
        assert_eq!(normalizer.normalize("一百零五"), "一百零五");
        assert_eq!(normalizer.normalize("〇幺"), "〇幺");
    }
}
