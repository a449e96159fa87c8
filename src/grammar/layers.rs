// ============================================================================
// Magnitude Layer Grammar
// Recursive-descent matcher for worded integers, one rule per magnitude layer
// ============================================================================
//
// Every layer above the tens follows the same shape:
//
//     exact(L) := head(L) unit(L) ( zero upto(zero_tail(L)) )?
//               | head(L) unit(L) exact(direct_tail(L))
//     upto(L)  := exact(L) | upto(L - 1)
//
// The zero glyph is mandatory whenever the layer directly below the unit is
// skipped (一百零五), and absent otherwise (一百一十五). Matchers return every
// position at which a rule can end, which keeps alternation exhaustive
// without backtracking state.

use crate::domain::{Glyph, GlyphTable, Mode, Unit};
use smallvec::SmallVec;

/// Candidate end positions of a partial match.
type Ends = SmallVec<[usize; 8]>;

/// Glyph buffer for a lexed numeral.
pub type Glyphs = SmallVec<[Glyph; 24]>;

/// Magnitude layers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Ones,
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    HundredMillions,
}

impl Layer {
    fn below(self) -> Option<Layer> {
        match self {
            Layer::Ones => None,
            Layer::Tens => Some(Layer::Ones),
            Layer::Hundreds => Some(Layer::Tens),
            Layer::Thousands => Some(Layer::Hundreds),
            Layer::TenThousands => Some(Layer::Thousands),
            Layer::HundredMillions => Some(Layer::TenThousands),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Any layer up to and including this one
    Upto(Layer),
    /// This layer exactly: its unit glyph must appear
    Exact(Layer),
}

#[derive(Debug)]
struct LayerSpec {
    layer: Layer,
    unit: Unit,
    head: Rule,
    zero_tail: Rule,
    direct_tail: Rule,
}

const LAYER_SPECS: [LayerSpec; 4] = [
    LayerSpec {
        layer: Layer::Hundreds,
        unit: Unit::Hundred,
        head: Rule::Exact(Layer::Ones),
        zero_tail: Rule::Upto(Layer::Ones),
        direct_tail: Rule::Exact(Layer::Tens),
    },
    LayerSpec {
        layer: Layer::Thousands,
        unit: Unit::Thousand,
        head: Rule::Exact(Layer::Ones),
        zero_tail: Rule::Upto(Layer::Tens),
        direct_tail: Rule::Exact(Layer::Hundreds),
    },
    LayerSpec {
        layer: Layer::TenThousands,
        unit: Unit::TenThousand,
        head: Rule::Upto(Layer::Thousands),
        zero_tail: Rule::Upto(Layer::Hundreds),
        direct_tail: Rule::Exact(Layer::Thousands),
    },
    LayerSpec {
        layer: Layer::HundredMillions,
        unit: Unit::HundredMillion,
        head: Rule::Upto(Layer::TenThousands),
        zero_tail: Rule::Upto(Layer::TenThousands),
        direct_tail: Rule::Exact(Layer::TenThousands),
    },
];

fn spec_for(layer: Layer) -> Option<&'static LayerSpec> {
    LAYER_SPECS.iter().find(|spec| spec.layer == layer)
}

/// Lex `text` into glyphs as seen by `mode`. `None` when any character is
/// not a digit or unit glyph of that mode.
pub fn lex(text: &str, mode: Mode) -> Option<Glyphs> {
    let table = GlyphTable::shared();
    text.chars().map(|ch| table.classify(ch, mode)).collect()
}

// ============================================================================
// Integer Grammar
// ============================================================================

/// Full-match grammar for worded integers up to the hundred-trillions.
#[derive(Debug, Clone)]
pub struct IntegerGrammar {
    mode: Mode,
    /// Accept a numeral opening with a bare 百/千 (implicit one)
    implicit_one_head: bool,
}

impl IntegerGrammar {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            implicit_one_head: mode != Mode::Strict,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True only when the whole of `text` is a legal integer.
    pub fn matches(&self, text: &str) -> bool {
        match lex(text, self.mode) {
            Some(glyphs) => self.matches_glyphs(&glyphs),
            None => false,
        }
    }

    pub fn matches_glyphs(&self, glyphs: &[Glyph]) -> bool {
        if glyphs.is_empty() {
            return false;
        }
        if glyphs.len() == 1 && glyphs[0].is_zero() {
            return true;
        }
        if self.implicit_one_head && Self::matches_implicit_one(glyphs) {
            return true;
        }
        self.ends(Rule::Upto(Layer::HundredMillions), glyphs, 0)
            .contains(&glyphs.len())
    }

    // 百, 千, 千一, 千零五
    fn matches_implicit_one(glyphs: &[Glyph]) -> bool {
        match glyphs {
            [Glyph::Unit(Unit::Hundred | Unit::Thousand), rest @ ..] => match rest {
                [] => true,
                [Glyph::Digit(d)] => *d != 0,
                [zero, Glyph::Digit(d)] => zero.is_zero() && *d != 0,
                _ => false,
            },
            _ => false,
        }
    }

    fn ends(&self, rule: Rule, glyphs: &[Glyph], pos: usize) -> Ends {
        let mut ends = match rule {
            Rule::Exact(layer) => self.exact(layer, glyphs, pos),
            Rule::Upto(layer) => {
                let mut ends = self.exact(layer, glyphs, pos);
                if let Some(lower) = layer.below() {
                    ends.extend(self.ends(Rule::Upto(lower), glyphs, pos));
                }
                ends
            }
        };
        ends.sort_unstable();
        ends.dedup();
        ends
    }

    fn exact(&self, layer: Layer, glyphs: &[Glyph], pos: usize) -> Ends {
        match layer {
            Layer::Ones => nonzero_digit(glyphs, pos).into_iter().collect(),
            Layer::Tens => {
                // digit? 十 digit?
                let mut ends = Ends::new();
                let starts = std::iter::once(pos).chain(nonzero_digit(glyphs, pos));
                for start in starts {
                    if let Some(after_unit) = unit(glyphs, start, Unit::Ten) {
                        ends.push(after_unit);
                        ends.extend(nonzero_digit(glyphs, after_unit));
                    }
                }
                ends
            }
            _ => match spec_for(layer) {
                Some(spec) => self.exact_layer(spec, glyphs, pos),
                None => Ends::new(),
            },
        }
    }

    fn exact_layer(&self, spec: &LayerSpec, glyphs: &[Glyph], pos: usize) -> Ends {
        let mut ends = Ends::new();
        for head_end in self.ends(spec.head, glyphs, pos) {
            let Some(after_unit) = unit(glyphs, head_end, spec.unit) else {
                continue;
            };
            ends.push(after_unit);
            if glyphs.get(after_unit).is_some_and(|g| g.is_zero()) {
                ends.extend(self.ends(spec.zero_tail, glyphs, after_unit + 1));
            }
            ends.extend(self.ends(spec.direct_tail, glyphs, after_unit));
        }
        ends
    }
}

#[inline]
fn nonzero_digit(glyphs: &[Glyph], pos: usize) -> Option<usize> {
    match glyphs.get(pos) {
        Some(Glyph::Digit(d)) if *d != 0 => Some(pos + 1),
        _ => None,
    }
}

#[inline]
fn unit(glyphs: &[Glyph], pos: usize, expected: Unit) -> Option<usize> {
    match glyphs.get(pos) {
        Some(Glyph::Unit(u)) if *u == expected => Some(pos + 1),
        _ => None,
    }
}
