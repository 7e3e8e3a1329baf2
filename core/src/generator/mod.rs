use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck;
}

/// Every symbol in order, then every symbol again.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrderedDeckGenerator;

impl DeckGenerator for OrderedDeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck {
        let cards = symbols.symbols().chain(symbols.symbols()).collect();
        Deck::new_unchecked(symbols.clone(), cards)
    }
}
