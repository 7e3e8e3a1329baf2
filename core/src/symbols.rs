use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest number of distinct symbols, one per [`Symbol`] id.
pub const MAX_SYMBOLS: usize = u8::MAX as usize + 1;

/// Lil fishies.
pub const DEFAULT_GLYPHS: [&str; 6] = ["🐡", "🐠", "🐙", "🦐", "🐋", "🐬"];

/// Ordered list of distinct glyphs that decks are built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSymbolSet")]
pub struct SymbolSet {
    glyphs: Vec<String>,
}

#[derive(Deserialize)]
struct RawSymbolSet {
    glyphs: Vec<String>,
}

impl TryFrom<RawSymbolSet> for SymbolSet {
    type Error = GameError;

    fn try_from(raw: RawSymbolSet) -> Result<Self> {
        Self::new(raw.glyphs)
    }
}

impl SymbolSet {
    pub fn new<I, S>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();

        if glyphs.is_empty() {
            return Err(GameError::EmptySymbolSet);
        }
        if glyphs.len() > MAX_SYMBOLS {
            return Err(GameError::TooManySymbols);
        }
        if glyphs.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(GameError::EmptyGlyph);
        }
        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return Err(GameError::DuplicateSymbol);
            }
        }

        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, symbol: Symbol) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    /// All symbols of this set in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.glyphs.len()).map(|i| Symbol(i as u8))
    }

    pub(crate) fn position_of(&self, glyph: &str) -> Option<Symbol> {
        self.glyphs
            .iter()
            .position(|g| g == glyph)
            .map(|i| Symbol(i as u8))
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Parses a comma separated list of glyphs, surrounding whitespace is ignored.
impl FromStr for SymbolSet {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(',').map(str::trim).filter(|glyph| !glyph.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn default_set_is_six_fish() {
        let symbols = SymbolSet::default();

        assert_eq!(symbols.len(), 6);
        assert_eq!(symbols.glyph(Symbol(0)), Some("🐡"));
        assert_eq!(symbols.glyph(Symbol(5)), Some("🐬"));
        assert_eq!(symbols.glyph(Symbol(6)), None);
    }

    #[test]
    fn rejects_empty_and_duplicate_sets() {
        assert_eq!(
            SymbolSet::new(Vec::<String>::new()),
            Err(GameError::EmptySymbolSet)
        );
        assert_eq!(
            SymbolSet::new(["A", "B", "A"]),
            Err(GameError::DuplicateSymbol)
        );
        assert_eq!(SymbolSet::new(["A", " "]), Err(GameError::EmptyGlyph));
    }

    #[test]
    fn rejects_more_symbols_than_ids() {
        let glyphs = (0..=MAX_SYMBOLS).map(|i| format!("s{i}"));

        assert_eq!(SymbolSet::new(glyphs), Err(GameError::TooManySymbols));
    }

    #[test]
    fn parses_comma_separated_list() {
        let symbols: SymbolSet = " A, B ,C,".parse().unwrap();

        assert_eq!(symbols, SymbolSet::new(["A", "B", "C"]).unwrap());
        assert_eq!(",,".parse::<SymbolSet>(), Err(GameError::EmptySymbolSet));
    }

    #[test]
    fn deserializing_validates_glyphs() {
        let symbols: SymbolSet = serde_json::from_str(r#"{"glyphs":["A","B"]}"#).unwrap();
        assert_eq!(symbols.len(), 2);

        assert!(serde_json::from_str::<SymbolSet>(r#"{"glyphs":["A","A"]}"#).is_err());
        assert!(serde_json::from_str::<SymbolSet>(r#"{"glyphs":[]}"#).is_err());
    }
}
