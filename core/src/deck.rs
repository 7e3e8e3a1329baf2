use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cards of one game, every symbol present appears exactly twice.
///
/// Decks are never modified after creation, a restart replaces the whole deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    symbols: SymbolSet,
    cards: Vec<Symbol>,
}

#[derive(Deserialize)]
struct RawDeck {
    symbols: SymbolSet,
    cards: Vec<Symbol>,
}

impl TryFrom<RawDeck> for Deck {
    type Error = GameError;

    fn try_from(raw: RawDeck) -> Result<Self> {
        Self::from_cards(raw.symbols, raw.cards)
    }
}

impl Deck {
    /// Caller must guarantee the pairing, used by generators.
    pub(crate) fn new_unchecked(symbols: SymbolSet, cards: Vec<Symbol>) -> Self {
        debug_assert!(check_pairs(&symbols, &cards).is_ok());
        Self { symbols, cards }
    }

    pub fn from_cards(symbols: SymbolSet, cards: Vec<Symbol>) -> Result<Self> {
        check_pairs(&symbols, &cards)?;
        Ok(Self { symbols, cards })
    }

    /// Builds a deck from glyphs laid out in order, the symbol set is made of the distinct glyphs in order of first
    /// appearance.
    pub fn from_glyphs<I, S>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();

        let mut distinct: Vec<&str> = Vec::new();
        for glyph in &glyphs {
            if !distinct.contains(&glyph.as_str()) {
                distinct.push(glyph);
            }
        }
        let symbols = SymbolSet::new(distinct.iter().copied())?;

        let cards = glyphs
            .iter()
            .map(|glyph| symbols.position_of(glyph).ok_or(GameError::UnknownSymbol))
            .collect::<Result<Vec<_>>>()?;

        Self::from_cards(symbols, cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn cards(&self) -> &[Symbol] {
        &self.cards
    }

    pub fn symbol_at(&self, pos: Position) -> Option<Symbol> {
        self.cards.get(pos).copied()
    }

    pub fn glyph_at(&self, pos: Position) -> Option<&str> {
        self.symbol_at(pos)
            .and_then(|symbol| self.symbols.glyph(symbol))
    }
}

impl Index<Position> for Deck {
    type Output = Symbol;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cards[pos]
    }
}

fn check_pairs(symbols: &SymbolSet, cards: &[Symbol]) -> Result<()> {
    if cards.is_empty() {
        return Err(GameError::EmptyDeck);
    }
    if cards.len() % 2 != 0 {
        return Err(GameError::OddDeckLength);
    }

    let mut seen = alloc::vec![0u8; symbols.len()];
    for &symbol in cards {
        let count = seen
            .get_mut(symbol.index())
            .ok_or(GameError::UnknownSymbol)?;
        *count = count.saturating_add(1);
    }

    if seen.iter().any(|&count| count != 0 && count != 2) {
        return Err(GameError::UnpairedSymbol);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_glyphs_assigns_symbols_by_first_appearance() {
        let deck = Deck::from_glyphs(["A", "B", "A", "B"]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck.cards(), &[Symbol(0), Symbol(1), Symbol(0), Symbol(1)]);
        assert_eq!(deck.glyph_at(1), Some("B"));
        assert_eq!(deck.glyph_at(4), None);
    }

    #[test]
    fn rejects_broken_pairings() {
        assert_eq!(
            Deck::from_glyphs(Vec::<String>::new()),
            Err(GameError::EmptySymbolSet)
        );
        assert_eq!(
            Deck::from_glyphs(["A", "A", "B"]),
            Err(GameError::OddDeckLength)
        );
        assert_eq!(
            Deck::from_glyphs(["A", "A", "A", "A"]),
            Err(GameError::UnpairedSymbol)
        );
        assert_eq!(
            Deck::from_glyphs(["A", "B", "C", "A"]),
            Err(GameError::UnpairedSymbol)
        );
    }

    #[test]
    fn from_cards_checks_symbol_ids() {
        let symbols = SymbolSet::new(["A"]).unwrap();

        assert_eq!(
            Deck::from_cards(symbols.clone(), Vec::new()),
            Err(GameError::EmptyDeck)
        );
        assert_eq!(
            Deck::from_cards(symbols, alloc::vec![Symbol(1), Symbol(1)]),
            Err(GameError::UnknownSymbol)
        );
    }

    #[test]
    fn symbols_of_the_set_may_be_left_out() {
        let symbols = SymbolSet::new(["A", "B", "C"]).unwrap();
        let deck = Deck::from_cards(symbols, alloc::vec![Symbol(2), Symbol(2)]).unwrap();

        assert_eq!(deck.glyph_at(0), Some("C"));
    }

    #[test]
    fn serializes_with_symbol_set() {
        let deck = Deck::from_glyphs(["🐙", "🐙"]).unwrap();

        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();

        assert_eq!(back, deck);
    }

    #[test]
    fn deserializing_rejects_unpaired_cards() {
        let unpaired = r#"{"symbols":{"glyphs":["A","B"]},"cards":[0,1,0,1,1,1]}"#;
        let unknown = r#"{"symbols":{"glyphs":["A","B"]},"cards":[0,1,7]}"#;
        let duplicate_glyphs = r#"{"symbols":{"glyphs":["A","A"]},"cards":[0,0]}"#;

        assert!(serde_json::from_str::<Deck>(unpaired).is_err());
        assert!(serde_json::from_str::<Deck>(unknown).is_err());
        assert!(serde_json::from_str::<Deck>(duplicate_glyphs).is_err());
    }
}
