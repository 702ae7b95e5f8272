//! Card module - a single grid cell
//!
//! A card knows its grid id, its pair value and whether it is face down,
//! face up as a candidate, or matched for the rest of the round.

use crate::types::{CardId, CardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    value: u8,
    state: CardState,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, value: u8) -> Self {
        Self {
            id,
            value,
            state: CardState::Hidden,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Flip the card over.
    ///
    /// Toggles Hidden <-> Revealed and returns true. Matched cards stay put and
    /// return false.
    pub fn reveal(&mut self) -> bool {
        self.state = match self.state {
            CardState::Matched => return false,
            CardState::Hidden => CardState::Revealed,
            CardState::Revealed => CardState::Hidden,
        };
        true
    }

    pub fn mark_matched(&mut self) {
        self.state = CardState::Matched;
    }

    pub fn reset(&mut self) {
        self.state = CardState::Hidden;
    }

    /// Give the card a new value and turn it face down.
    pub(crate) fn deal(&mut self, value: u8) {
        self.value = value;
        self.reset();
    }
}
