//! Turn controller - the flip/resolve state machine
//!
//! A turn collects up to two candidate cards. The second candidate locks input
//! and arms the resolve timer; when the timer fires, the pair is either matched
//! or flipped back and the turn starts over.
//!
//! ```text
//!            select              select (other card)          delay elapsed
//!   Idle ─────────────▶ OneSelected ─────────────▶ AwaitingResolution ─────┐
//!    ▲                                                                     │
//!    └──────────── mismatch / match (pairs left) ◀─────────────────────────┤
//!                                                                          ▼
//!                                               RoundOver ◀── last match ──┘
//! ```
//!
//! The controller holds card ids only. The deck, the session tracker and the
//! event buffer are passed in by the owner on every call.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::deck::Deck;
use crate::session::SessionTracker;
use crate::timer::ResolveTimer;
use crate::types::{CardId, Completion, CoreEvent, Phase, TurnState};

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Two candidates are waiting for the resolve timer.
    InputLocked,
    /// Every pair has been matched.
    RoundOver,
    /// The id is outside the deck.
    UnknownCard,
    /// The card is already the pending candidate.
    SameCard,
    /// The card is face up (revealed or matched).
    NotHidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Rejected(RejectReason),
    FirstCandidate,
    SecondCandidate,
}

impl SelectOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }
}

/// Result of evaluating a pair of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched {
        value: u8,
        /// Set when this match completed the round.
        completion: Option<Completion>,
    },
    Mismatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gate {
    #[default]
    Open,
    AwaitingResolution,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct TurnController {
    pending: ArrayVec<CardId, 2>,
    gate: Gate,
    timer: ResolveTimer,
    resolve_delay_ms: u64,
}

impl TurnController {
    pub fn new(resolve_delay_ms: u64) -> Self {
        Self {
            pending: ArrayVec::new(),
            gate: Gate::Open,
            timer: ResolveTimer::new(),
            resolve_delay_ms,
        }
    }

    pub fn state(&self) -> TurnState {
        match self.gate {
            Gate::RoundOver => TurnState::RoundOver,
            Gate::AwaitingResolution => TurnState::AwaitingResolution,
            Gate::Open if self.pending.is_empty() => TurnState::Idle,
            Gate::Open => TurnState::OneSelected,
        }
    }

    /// Candidate ids in selection order.
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    pub fn is_input_locked(&self) -> bool {
        self.gate != Gate::Open
    }

    /// Time until the pending pair is evaluated, if one is pending.
    pub fn resolve_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.timer.remaining_ms(now_ms)
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.timer.is_pending()
    }

    /// Flip a card as part of the current turn.
    ///
    /// The first accepted selection of a fresh round also starts the session
    /// clock. Rejections leave every piece of state untouched.
    pub fn select_card(
        &mut self,
        id: CardId,
        deck: &mut Deck,
        session: &mut SessionTracker,
        now_ms: u64,
        events: &mut Vec<CoreEvent>,
    ) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(id, deck) {
            debug!(card = id.0, ?reason, "selection rejected");
            return SelectOutcome::Rejected(reason);
        }

        if session.phase() == Phase::NotStarted && session.start_round(now_ms) {
            events.push(CoreEvent::RoundStarted);
        }

        let Some(card) = deck.get_mut(id) else {
            return SelectOutcome::Rejected(RejectReason::UnknownCard);
        };
        if card.reveal() {
            events.push(CoreEvent::CardStateChanged {
                id,
                state: card.state(),
            });
            events.push(CoreEvent::FlipCue);
        }

        if self.pending.try_push(id).is_err() {
            debug_assert!(false, "third candidate selected in one turn");
            return SelectOutcome::Rejected(RejectReason::InputLocked);
        }

        if self.pending.len() == 1 {
            debug!(card = id.0, "first candidate");
            SelectOutcome::FirstCandidate
        } else {
            self.gate = Gate::AwaitingResolution;
            self.timer.schedule(now_ms, self.resolve_delay_ms);
            debug!(card = id.0, delay_ms = self.resolve_delay_ms, "second candidate, input locked");
            SelectOutcome::SecondCandidate
        }
    }

    fn check_selectable(&self, id: CardId, deck: &Deck) -> Result<(), RejectReason> {
        match self.gate {
            Gate::RoundOver => return Err(RejectReason::RoundOver),
            Gate::AwaitingResolution => return Err(RejectReason::InputLocked),
            Gate::Open => {}
        }
        let card = deck.get(id).ok_or(RejectReason::UnknownCard)?;
        if self.pending.contains(&id) {
            return Err(RejectReason::SameCard);
        }
        if !card.is_hidden() {
            return Err(RejectReason::NotHidden);
        }
        Ok(())
    }

    /// Advance the resolve timer; evaluates the pair once the delay has elapsed.
    pub fn tick(
        &mut self,
        deck: &mut Deck,
        session: &mut SessionTracker,
        now_ms: u64,
        events: &mut Vec<CoreEvent>,
    ) -> Option<Resolution> {
        let token = self.timer.poll(now_ms)?;
        debug_assert!(self.timer.is_current(token));
        self.resolve(deck, session, now_ms, events)
    }

    fn resolve(
        &mut self,
        deck: &mut Deck,
        session: &mut SessionTracker,
        now_ms: u64,
        events: &mut Vec<CoreEvent>,
    ) -> Option<Resolution> {
        debug_assert_eq!(self.pending.len(), 2, "resolve without two candidates");
        let pair = match *self.pending.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        };
        self.pending.clear();
        let Some((first, second)) = pair else {
            self.gate = Gate::Open;
            return None;
        };

        let value_of = |deck: &Deck, id: CardId| deck.get(id).map(|c| c.value());
        let (Some(a), Some(b)) = (value_of(deck, first), value_of(deck, second)) else {
            self.gate = Gate::Open;
            return None;
        };

        if a == b {
            for id in [first, second] {
                if let Some(card) = deck.get_mut(id) {
                    card.mark_matched();
                    events.push(CoreEvent::CardStateChanged {
                        id,
                        state: card.state(),
                    });
                }
            }

            let matched = session.record_match();
            debug!(value = a, matched, "pair matched");

            let completion = if deck.all_matched() {
                let duration_ms = session.live_elapsed(now_ms);
                let completion = session.complete_round(duration_ms);
                if let Some(done) = completion {
                    events.push(CoreEvent::RoundCompleted(done));
                }
                self.gate = Gate::RoundOver;
                completion
            } else {
                self.gate = Gate::Open;
                None
            };

            Some(Resolution::Matched {
                value: a,
                completion,
            })
        } else {
            for id in [first, second] {
                if let Some(card) = deck.get_mut(id) {
                    if card.reveal() {
                        events.push(CoreEvent::CardStateChanged {
                            id,
                            state: card.state(),
                        });
                        events.push(CoreEvent::FlipCue);
                    }
                }
            }
            debug!(first = first.0, second = second.0, "mismatch, cards hidden");
            self.gate = Gate::Open;
            Some(Resolution::Mismatched)
        }
    }

    /// Drop the current turn: cancels the resolve timer, clears candidates and
    /// reopens input.
    pub fn reset(&mut self) {
        if self.timer.cancel() {
            debug!("pending resolution cancelled");
        }
        self.pending.clear();
        self.gate = Gate::Open;
    }

    /// Cancel the resolve timer without touching the turn. Idempotent.
    pub fn cancel_pending(&mut self) -> bool {
        self.timer.cancel()
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(crate::types::RESOLVE_DELAY_MS)
    }
}
