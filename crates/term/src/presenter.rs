//! TerminalPresenter: turns core events into redraws and bells.

use tracing::debug;

use crate::core::Presenter;
use crate::types::{CardId, CardState, Completion};

/// Collects what the next frame has to do. The main loop reads it after
/// dispatching events and then calls [`TerminalPresenter::take_bells`].
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    sound: bool,
    pending_bells: u32,
    dirty: bool,
}

impl TerminalPresenter {
    pub fn new(sound: bool) -> Self {
        Self {
            sound,
            pending_bells: 0,
            dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Bells owed since the last call. Several cues in one frame collapse into one.
    pub fn take_bells(&mut self) -> bool {
        let ring = self.pending_bells > 0;
        self.pending_bells = 0;
        ring
    }
}

impl Presenter for TerminalPresenter {
    fn on_card_state_changed(&mut self, id: CardId, state: CardState) {
        debug!(card = id.0, state = state.as_str(), "card state changed");
        self.dirty = true;
    }

    fn on_flip_cue(&mut self) {
        if self.sound {
            self.pending_bells = self.pending_bells.saturating_add(1);
        }
        self.dirty = true;
    }

    fn on_round_started(&mut self) {
        self.dirty = true;
    }

    fn on_round_completed(&mut self, _completion: Completion) {
        self.dirty = true;
    }

    fn on_round_reset(&mut self) {
        self.pending_bells = 0;
        self.dirty = true;
    }
}
