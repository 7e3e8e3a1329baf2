use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Player-visible state of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    /// Face-up and under comparison.
    Selected(Symbol),
    /// Face-up as part of a found pair.
    Matched(Symbol),
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    OutOfBounds,
    AlreadyFaceUp,
    /// Two cards are face-up waiting for their comparison to resolve.
    Comparing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection ignored, nothing changed.
    Rejected(RejectReason),
    /// First card of a pair turned face-up.
    Revealed,
    /// Second card matched the first.
    Matched,
    /// Second card matched and that was the last pair.
    Won,
    /// Second card did not match, both stay face-up until `flip` is resolved after [`PendingFlip::delay`].
    Mismatched(PendingFlip),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub const fn pending_flip(self) -> Option<PendingFlip> {
        match self {
            Self::Mismatched(flip) => Some(flip),
            _ => None,
        }
    }
}

/// Deferred reset of a mismatched pair, bound to the game it was created in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlip {
    generation: Generation,
    first: Position,
    second: Position,
}

impl PendingFlip {
    pub const fn delay(self) -> Duration {
        MISMATCH_DELAY
    }

    pub const fn generation(self) -> Generation {
        self.generation
    }

    pub const fn positions(self) -> (Position, Position) {
        (self.first, self.second)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    FlippedBack,
    /// Flip belongs to a game or comparison that is already gone, nothing changed.
    Stale,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::FlippedBack)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTurnResolver")]
pub struct TurnResolver {
    deck: Deck,
    face_up: Vec<bool>,
    selection: SmallVec<[Position; 2]>,
    found_pairs: Count,
    clicks: Count,
    comparing: bool,
    won: bool,
    generation: Generation,
}

#[derive(Deserialize)]
struct RawTurnResolver {
    deck: Deck,
    face_up: Vec<bool>,
    selection: SmallVec<[Position; 2]>,
    found_pairs: Count,
    clicks: Count,
    comparing: bool,
    won: bool,
    generation: Generation,
}

/// Restored state must be one `select`/`resolve_mismatch` could have produced.
impl TryFrom<RawTurnResolver> for TurnResolver {
    type Error = GameError;

    fn try_from(raw: RawTurnResolver) -> Result<Self> {
        let RawTurnResolver {
            deck,
            face_up,
            selection,
            found_pairs,
            clicks,
            comparing,
            won,
            generation,
        } = raw;

        if face_up.len() != deck.len() {
            return Err(GameError::InconsistentState);
        }

        let selection_ok = match selection.as_slice() {
            [] => !comparing,
            &[pos] => !comparing && pos < deck.len(),
            &[first, second] => {
                comparing
                    && first != second
                    && first.max(second) < deck.len()
                    && deck[first] != deck[second]
            }
            _ => false,
        };
        if !selection_ok || selection.iter().any(|&pos| !face_up[pos]) {
            return Err(GameError::InconsistentState);
        }

        let found = found_pairs as usize;
        let face_up_count = face_up.iter().filter(|&&up| up).count();
        if found > deck.pair_count()
            || face_up_count != found * 2 + selection.len()
            || won != (found == deck.pair_count())
        {
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            deck,
            face_up,
            selection,
            found_pairs,
            clicks,
            comparing,
            won,
            generation,
        })
    }
}

impl TurnResolver {
    pub fn new(deck: Deck) -> Self {
        Self::with_generation(deck, Generation::default())
    }

    fn with_generation(deck: Deck, generation: Generation) -> Self {
        let face_up = vec![false; deck.len()];
        Self {
            deck,
            face_up,
            selection: SmallVec::new(),
            found_pairs: 0,
            clicks: 0,
            comparing: false,
            won: false,
            generation,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn found_pairs(&self) -> Count {
        self.found_pairs
    }

    pub fn clicks(&self) -> Count {
        self.clicks
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Whether a comparison is pending, no selections are accepted meanwhile.
    pub fn is_comparing(&self) -> bool {
        self.comparing
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Positions under comparison, in the order they were selected.
    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    pub fn is_face_up(&self, pos: Position) -> bool {
        self.face_up.get(pos).copied().unwrap_or(false)
    }

    pub fn face_up(&self) -> &[bool] {
        &self.face_up
    }

    pub fn card_at(&self, pos: Position) -> CardFace {
        match self.deck.symbol_at(pos) {
            Some(symbol) if self.is_face_up(pos) => {
                if self.selection.contains(&pos) {
                    CardFace::Selected(symbol)
                } else {
                    CardFace::Matched(symbol)
                }
            }
            _ => CardFace::Hidden,
        }
    }

    pub fn can_select(&self, pos: Position) -> bool {
        self.check_selectable(pos).is_ok()
    }

    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(pos) {
            log::trace!("selection of {} rejected: {:?}", pos, reason);
            return SelectOutcome::Rejected(reason);
        }

        self.clicks = self.clicks.saturating_add(1);
        self.face_up[pos] = true;
        self.selection.push(pos);

        let &[first, second] = self.selection.as_slice() else {
            return SelectOutcome::Revealed;
        };

        self.comparing = true;
        if self.deck[first] == self.deck[second] {
            self.found_pairs += 1;
            self.selection.clear();
            self.comparing = false;
            log::debug!("pair found at {} and {}", first, second);
            if self.update_won() {
                log::debug!("all {} pairs found in {} clicks", self.found_pairs, self.clicks);
                SelectOutcome::Won
            } else {
                SelectOutcome::Matched
            }
        } else {
            log::debug!("mismatch at {} and {}", first, second);
            SelectOutcome::Mismatched(PendingFlip {
                generation: self.generation,
                first,
                second,
            })
        }
    }

    /// Applies a deferred mismatch reset, flips scheduled before a restart are ignored.
    pub fn resolve_mismatch(&mut self, flip: PendingFlip) -> FlipOutcome {
        if flip.generation != self.generation {
            log::debug!(
                "ignoring flip from {}, current game is {}",
                flip.generation,
                self.generation
            );
            return FlipOutcome::Stale;
        }

        if !self.comparing || self.selection.as_slice() != [flip.first, flip.second] {
            log::debug!("ignoring flip of {:?}, not under comparison", flip.positions());
            return FlipOutcome::Stale;
        }

        self.face_up[flip.first] = false;
        self.face_up[flip.second] = false;
        self.selection.clear();
        self.comparing = false;
        FlipOutcome::FlippedBack
    }

    /// Starts over with `deck`, can be called at any time.
    pub fn restart(&mut self, deck: Deck) {
        let generation = self.generation.next();
        log::debug!("restarting as {} with {} cards", generation, deck.len());
        *self = Self::with_generation(deck, generation);
    }

    fn check_selectable(&self, pos: Position) -> core::result::Result<(), RejectReason> {
        if pos >= self.deck.len() {
            Err(RejectReason::OutOfBounds)
        } else if self.comparing || self.selection.len() >= 2 {
            Err(RejectReason::Comparing)
        } else if self.face_up[pos] {
            Err(RejectReason::AlreadyFaceUp)
        } else {
            Ok(())
        }
    }

    /// Returns whether the game just became won.
    fn update_won(&mut self) -> bool {
        let won = !self.deck.is_empty() && self.found_pairs as usize == self.deck.pair_count();
        let newly_won = won && !self.won;
        self.won = won;
        newly_won
    }
}
