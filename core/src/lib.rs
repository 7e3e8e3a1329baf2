#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use symbols::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod generator;
mod symbols;
mod types;

/// Deals a fresh shuffled deck for `symbols`.
pub fn deal(symbols: &SymbolSet, seed: u64) -> Deck {
    ShuffledDeckGenerator::new(seed).generate(symbols)
}

/// Starts a game with a freshly shuffled deck.
pub fn new_game(symbols: &SymbolSet, seed: u64) -> TurnResolver {
    TurnResolver::new(deal(symbols, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_game_with_known_layout() {
        let symbols = SymbolSet::new(["A", "B", "C"]).unwrap();
        let mut resolver = TurnResolver::new(OrderedDeckGenerator.generate(&symbols));

        // 0 and 1 differ, take the detour once
        resolver.select(0);
        let flip = resolver.select(1).pending_flip().unwrap();
        assert_eq!(resolver.resolve_mismatch(flip), FlipOutcome::FlippedBack);

        for (first, second) in [(0, 3), (1, 4)] {
            resolver.select(first);
            assert_eq!(resolver.select(second), SelectOutcome::Matched);
        }
        resolver.select(2);
        assert_eq!(resolver.select(5), SelectOutcome::Won);

        assert!(resolver.is_won());
        assert_eq!(resolver.found_pairs(), 3);
        assert_eq!(resolver.clicks(), 8);
    }

    #[test]
    fn new_game_uses_seeded_deal() {
        let symbols = SymbolSet::default();

        let resolver = new_game(&symbols, 3);

        assert_eq!(resolver.deck(), &deal(&symbols, 3));
        assert_eq!(resolver.len(), 12);
    }
}
