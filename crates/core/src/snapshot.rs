use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::card::Card;
use crate::types::{CardId, CardState, Completion, Phase, TurnState, GRID_SIZE, MAX_CARDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub id: CardId,
    pub value: u8,
    pub state: CardState,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            value: card.value(),
            state: card.state(),
        }
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: ArrayVec<CardSnapshot, MAX_CARDS>,
    pub columns: u8,
    pub n_pairs: u8,
    pub turn: TurnState,
    pub input_locked: bool,
    pub phase: Phase,
    pub matched_pairs: u8,
    pub total_games: u32,
    pub best_time_ms: Option<u64>,
    pub elapsed_ms: u64,
    pub resolve_remaining_ms: Option<u64>,
    pub last_completion: Option<Completion>,
    pub round_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.columns = GRID_SIZE;
        self.n_pairs = 0;
        self.turn = TurnState::Idle;
        self.input_locked = false;
        self.phase = Phase::NotStarted;
        self.matched_pairs = 0;
        self.total_games = 0;
        self.best_time_ms = None;
        self.elapsed_ms = 0;
        self.resolve_remaining_ms = None;
        self.last_completion = None;
        self.round_id = 0;
    }

    pub fn card(&self, id: CardId) -> Option<&CardSnapshot> {
        self.cards.get(id.index())
    }

    pub fn rows(&self) -> u8 {
        let cols = self.columns.max(1) as usize;
        self.cards.len().div_ceil(cols) as u8
    }

    /// Restart/quit buttons are only offered once the round is complete.
    pub fn controls_visible(&self) -> bool {
        self.phase.is_complete()
    }

    /// Nothing on screen changes over time: no running clock, no pending flip-back.
    pub fn is_static(&self) -> bool {
        !self.phase.is_running() && self.resolve_remaining_ms.is_none()
    }

    /// Cheap content hash for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: ArrayVec::new(),
            columns: GRID_SIZE,
            n_pairs: 0,
            turn: TurnState::Idle,
            input_locked: false,
            phase: Phase::NotStarted,
            matched_pairs: 0,
            total_games: 0,
            best_time_ms: None,
            elapsed_ms: 0,
            resolve_remaining_ms: None,
            last_completion: None,
            round_id: 0,
        }
    }
}
