use super::*;

/// Uniformly shuffled deck, the same seed always deals the same deck.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck {
        use rand::prelude::*;

        let mut cards: alloc::vec::Vec<Symbol> =
            symbols.symbols().chain(symbols.symbols()).collect();

        // Fisher-Yates
        let mut rng = SmallRng::seed_from_u64(self.seed);
        cards.shuffle(&mut rng);

        log::trace!("dealt {} cards with seed {}", cards.len(), self.seed);
        Deck::new_unchecked(symbols.clone(), cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn symbol_set(size: usize) -> SymbolSet {
        SymbolSet::new((0..size).map(|i| alloc::format!("s{i}"))).unwrap()
    }

    #[test]
    fn same_seed_deals_same_deck() {
        let symbols = SymbolSet::default();

        let a = ShuffledDeckGenerator::new(42).generate(&symbols);
        let b = ShuffledDeckGenerator::new(42).generate(&symbols);

        assert_eq!(a, b);
    }

    #[test]
    fn seeds_change_the_order() {
        let symbols = symbol_set(32);

        let decks: Vec<Deck> = (0..4)
            .map(|seed| ShuffledDeckGenerator::new(seed).generate(&symbols))
            .collect();

        assert!(decks.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn single_symbol_deals_one_pair() {
        let symbols = SymbolSet::new([String::from("A")]).unwrap();

        let deck = ShuffledDeckGenerator::new(7).generate(&symbols);

        assert_eq!(deck.cards(), &[Symbol(0), Symbol(0)]);
    }
}
