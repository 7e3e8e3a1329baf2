use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol set must contain at least one symbol")]
    EmptySymbolSet,
    #[error("Symbols cannot be blank")]
    EmptyGlyph,
    #[error("Symbol set contains a duplicate symbol")]
    DuplicateSymbol,
    #[error("Symbol set is too large, at most {} symbols are supported", crate::MAX_SYMBOLS)]
    TooManySymbols,
    #[error("Deck must contain at least one pair")]
    EmptyDeck,
    #[error("Deck length must be even")]
    OddDeckLength,
    #[error("Deck refers to a symbol outside its symbol set")]
    UnknownSymbol,
    #[error("Every symbol in a deck must appear exactly twice")]
    UnpairedSymbol,
    #[error("Game state does not agree with its deck")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
