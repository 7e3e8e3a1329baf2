use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Index of a card within a deck.
pub type Position = usize;

/// Count type used for found pairs and accepted clicks.
pub type Count = u32;

/// How long a mismatched pair stays face-up before it is flipped back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(500);

/// Identifier of a symbol, an index into the [`SymbolSet`](crate::SymbolSet) of its deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies one game instance. Every restart moves to the next generation, anything captured under an older
/// generation no longer applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}
