// ============================================================================
// Glyph Tables
// Immutable digit-glyph and unit-glyph lookup tables
// ============================================================================

use super::config::Mode;
use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// Marker Glyphs
// ============================================================================

/// Decimal point marker.
pub const POINT: char = '点';

/// Leading negative-sign marker.
pub const NEGATIVE: char = '负';

/// Currency glyphs recognised by the yuan/jiao/fen shorthand.
pub const YUAN: [char; 2] = ['元', '圆'];
pub const JIAO: char = '角';
pub const FEN: char = '分';

/// Arabic characters accepted in smart mode on top of the normal glyph set.
pub const SMART_EXTRA: &str = "0123456789.-";

// ============================================================================
// Value Objects
// ============================================================================

/// Magnitude unit, ordered by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredMillion,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Ten,
        Unit::Hundred,
        Unit::Thousand,
        Unit::TenThousand,
        Unit::HundredMillion,
    ];

    #[inline]
    pub const fn magnitude(self) -> i64 {
        match self {
            Unit::Ten => 10,
            Unit::Hundred => 100,
            Unit::Thousand => 1_000,
            Unit::TenThousand => 10_000,
            Unit::HundredMillion => 100_000_000,
        }
    }

    /// Large units (万, 亿) multiply a whole accumulated segment.
    #[inline]
    pub const fn is_large(self) -> bool {
        self.magnitude() >= 10_000
    }

    /// Canonical (lowercase) glyph for this unit.
    pub const fn canonical(self) -> char {
        match self {
            Unit::Ten => '十',
            Unit::Hundred => '百',
            Unit::Thousand => '千',
            Unit::TenThousand => '万',
            Unit::HundredMillion => '亿',
        }
    }

    pub fn from_magnitude(magnitude: i64) -> Option<Unit> {
        Self::ALL.into_iter().find(|u| u.magnitude() == magnitude)
    }
}

/// Classified glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Digit 0-9; zero doubles as the formal elision marker.
    Digit(u8),
    Unit(Unit),
}

impl Glyph {
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Glyph::Digit(0)
    }

    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Glyph::Digit(_))
    }
}

/// Whether a glyph belongs to the formal set or is only accepted colloquially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    Formal,
    Colloquial,
}

// ============================================================================
// Static Table Data
// ============================================================================

const DIGIT_GLYPHS: [(char, u8, GlyphStyle); 22] = [
    ('零', 0, GlyphStyle::Formal),
    ('〇', 0, GlyphStyle::Colloquial),
    ('一', 1, GlyphStyle::Formal),
    ('壹', 1, GlyphStyle::Formal),
    ('幺', 1, GlyphStyle::Colloquial),
    ('二', 2, GlyphStyle::Formal),
    ('贰', 2, GlyphStyle::Formal),
    ('两', 2, GlyphStyle::Colloquial),
    ('三', 3, GlyphStyle::Formal),
    ('叁', 3, GlyphStyle::Formal),
    ('四', 4, GlyphStyle::Formal),
    ('肆', 4, GlyphStyle::Formal),
    ('五', 5, GlyphStyle::Formal),
    ('伍', 5, GlyphStyle::Formal),
    ('六', 6, GlyphStyle::Formal),
    ('陆', 6, GlyphStyle::Formal),
    ('七', 7, GlyphStyle::Formal),
    ('柒', 7, GlyphStyle::Formal),
    ('八', 8, GlyphStyle::Formal),
    ('捌', 8, GlyphStyle::Formal),
    ('九', 9, GlyphStyle::Formal),
    ('玖', 9, GlyphStyle::Formal),
];

const UNIT_GLYPHS: [(char, Unit); 8] = [
    ('十', Unit::Ten),
    ('拾', Unit::Ten),
    ('百', Unit::Hundred),
    ('佰', Unit::Hundred),
    ('千', Unit::Thousand),
    ('仟', Unit::Thousand),
    ('万', Unit::TenThousand),
    ('亿', Unit::HundredMillion),
];

/// Canonical lowercase digit glyphs, indexed by value.
pub const CANONICAL_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

// ============================================================================
// Glyph Table
// ============================================================================

/// Immutable glyph lookup shared by every converter.
#[derive(Debug)]
pub struct GlyphTable {
    glyphs: HashMap<char, (Glyph, GlyphStyle)>,
}

static SHARED_TABLE: OnceLock<GlyphTable> = OnceLock::new();

impl GlyphTable {
    fn build() -> Self {
        let mut glyphs = HashMap::with_capacity(DIGIT_GLYPHS.len() + UNIT_GLYPHS.len());
        for (ch, value, style) in DIGIT_GLYPHS {
            glyphs.insert(ch, (Glyph::Digit(value), style));
        }
        for (ch, unit) in UNIT_GLYPHS {
            glyphs.insert(ch, (Glyph::Unit(unit), GlyphStyle::Formal));
        }
        Self { glyphs }
    }

    /// The process-wide table, built on first use and never mutated.
    pub fn shared() -> &'static GlyphTable {
        SHARED_TABLE.get_or_init(Self::build)
    }

    /// Classify a glyph as seen by `mode`. Colloquial variants are invisible
    /// to strict mode.
    #[inline]
    pub fn classify(&self, ch: char, mode: Mode) -> Option<Glyph> {
        match self.glyphs.get(&ch) {
            Some((_, GlyphStyle::Colloquial)) if mode == Mode::Strict => None,
            Some((glyph, _)) => Some(*glyph),
            None => None,
        }
    }

    /// Digit value of `ch` under `mode`, if it is a digit glyph.
    #[inline]
    pub fn digit(&self, ch: char, mode: Mode) -> Option<u8> {
        match self.classify(ch, mode)? {
            Glyph::Digit(value) => Some(value),
            Glyph::Unit(_) => None,
        }
    }

    /// Unit of `ch` under `mode`, if it is a unit glyph.
    #[inline]
    pub fn unit(&self, ch: char, mode: Mode) -> Option<Unit> {
        match self.classify(ch, mode)? {
            Glyph::Unit(unit) => Some(unit),
            Glyph::Digit(_) => None,
        }
    }

    /// Whether `ch` may appear in the input of `mode` at all.
    pub fn is_permitted(&self, ch: char, mode: Mode) -> bool {
        if ch == POINT || ch == NEGATIVE || self.classify(ch, mode).is_some() {
            return true;
        }
        mode == Mode::Smart && SMART_EXTRA.contains(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_and_unit_sets_disjoint() {
        for (ch, _, _) in DIGIT_GLYPHS {
            assert!(UNIT_GLYPHS.iter().all(|(u, _)| *u != ch), "{ch} in both tables");
        }
    }

    #[test]
    fn test_unit_magnitudes_increase_with_rank() {
        let magnitudes: Vec<i64> = Unit::ALL.iter().map(|u| u.magnitude()).collect();
        assert!(magnitudes.windows(2).all(|w| w[0] < w[1]));
        assert!(Unit::TenThousand.is_large());
        assert!(!Unit::Thousand.is_large());
    }

    #[test]
    fn test_colloquial_variants_hidden_in_strict() {
        let table = GlyphTable::shared();
        assert_eq!(table.digit('两', Mode::Normal), Some(2));
        assert_eq!(table.digit('两', Mode::Strict), None);
        assert_eq!(table.digit('〇', Mode::Smart), Some(0));
        assert_eq!(table.digit('贰', Mode::Strict), Some(2));
        assert_eq!(table.unit('仟', Mode::Strict), Some(Unit::Thousand));
    }

    #[test]
    fn test_permitted_sets() {
        let table = GlyphTable::shared();
        assert!(table.is_permitted('点', Mode::Strict));
        assert!(table.is_permitted('负', Mode::Strict));
        assert!(!table.is_permitted('幺', Mode::Strict));
        assert!(!table.is_permitted('3', Mode::Normal));
        assert!(table.is_permitted('3', Mode::Smart));
        assert!(table.is_permitted('.', Mode::Smart));
        assert!(!table.is_permitted('元', Mode::Smart));
    }

    #[test]
    fn test_from_magnitude() {
        assert_eq!(Unit::from_magnitude(1_000), Some(Unit::Thousand));
        assert_eq!(Unit::from_magnitude(10_000_000), None);
        assert_eq!(Unit::from_magnitude(1), None);
    }
}
