//! Presenter port - how a frontend consumes core events
//!
//! The core never calls into rendering or audio. It buffers [`CoreEvent`]s and
//! the frontend drains them into a `Presenter` once per frame. All methods
//! default to no-ops so a frontend only implements what it cares about.

use crate::types::{CardId, CardState, Completion, CoreEvent};

pub trait Presenter {
    fn on_card_state_changed(&mut self, _id: CardId, _state: CardState) {}

    /// Fire-and-forget; implementations swallow playback failures.
    fn on_flip_cue(&mut self) {}

    fn on_round_started(&mut self) {}

    fn on_round_completed(&mut self, _completion: Completion) {}

    fn on_round_reset(&mut self) {}

    fn handle(&mut self, event: &CoreEvent) {
        match *event {
            CoreEvent::CardStateChanged { id, state } => self.on_card_state_changed(id, state),
            CoreEvent::FlipCue => self.on_flip_cue(),
            CoreEvent::RoundStarted => self.on_round_started(),
            CoreEvent::RoundCompleted(completion) => self.on_round_completed(completion),
            CoreEvent::RoundReset => self.on_round_reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        cues: u32,
        changes: u32,
        completed: Option<Completion>,
    }

    impl Presenter for Counter {
        fn on_card_state_changed(&mut self, _id: CardId, _state: CardState) {
            self.changes += 1;
        }

        fn on_flip_cue(&mut self) {
            self.cues += 1;
        }

        fn on_round_completed(&mut self, completion: Completion) {
            self.completed = Some(completion);
        }
    }

    #[test]
    fn test_handle_dispatches() {
        let mut p = Counter::default();
        let done = Completion {
            duration_ms: 10,
            is_new_best: true,
        };

        for e in [
            CoreEvent::FlipCue,
            CoreEvent::CardStateChanged {
                id: CardId(1),
                state: CardState::Revealed,
            },
            CoreEvent::RoundStarted,
            CoreEvent::RoundCompleted(done),
            CoreEvent::RoundReset,
        ] {
            p.handle(&e);
        }

        assert_eq!(p.cues, 1);
        assert_eq!(p.changes, 1);
        assert_eq!(p.completed, Some(done));
    }
}
