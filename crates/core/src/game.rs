//! Game module - owns one board and its session
//!
//! This module ties together the deck, the turn controller and the session
//! tracker. Frontends feed it selections and a monotonic clock (`now_ms`) and
//! read back snapshots and events.

use tracing::info;

use crate::config::GameConfig;
use crate::deck::Deck;
use crate::presenter::Presenter;
use crate::rng::DeckRng;
use crate::session::SessionTracker;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::turn::{Resolution, SelectOutcome, TurnController};
use crate::types::*;

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: DeckRng,
    deck: Deck,
    turn: TurnController,
    session: SessionTracker,
    events: Vec<CoreEvent>,
    /// Monotonic round id (increments on restart).
    round_id: u32,
    last_completion: Option<Completion>,
}

impl Game {
    /// Deal a new board according to `config`.
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let mut rng = DeckRng::from_option(config.seed);
        let deck = Deck::build(config.n_pairs, &mut rng);
        Self::from_parts(config, rng, deck)
    }

    /// Start from an explicit card layout; restarts shuffle normally.
    ///
    /// Returns `None` when `values` is not a valid pairing.
    pub fn with_deck(config: GameConfig, values: &[u8]) -> Option<Self> {
        let deck = Deck::from_values(values)?;
        let config = GameConfig {
            n_pairs: deck.n_pairs(),
            ..config
        }
        .normalized();
        let rng = DeckRng::from_option(config.seed);
        Some(Self::from_parts(config, rng, deck))
    }

    fn from_parts(config: GameConfig, rng: DeckRng, deck: Deck) -> Self {
        Self {
            turn: TurnController::new(config.resolve_delay_ms),
            config,
            rng,
            deck,
            session: SessionTracker::new(),
            events: Vec::with_capacity(16),
            round_id: 0,
            last_completion: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn session(&self) -> &SessionTracker {
        &self.session
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn pending(&self) -> &[CardId] {
        self.turn.pending()
    }

    pub fn is_input_locked(&self) -> bool {
        self.turn.is_input_locked()
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.turn.has_pending_resolution()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn matched_pairs(&self) -> u8 {
        self.session.matched_pairs()
    }

    pub fn n_pairs(&self) -> u8 {
        self.deck.n_pairs()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion
    }

    pub fn card_state(&self, id: CardId) -> Option<CardState> {
        self.deck.get(id).map(|c| c.state())
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.session.live_elapsed(now_ms)
    }

    /// Flip a card. The first accepted flip of a round starts its clock.
    pub fn select_card(&mut self, id: CardId, now_ms: u64) -> SelectOutcome {
        self.turn.select_card(
            id,
            &mut self.deck,
            &mut self.session,
            now_ms,
            &mut self.events,
        )
    }

    /// Advance game time. Call once per frame.
    pub fn tick(&mut self, now_ms: u64) -> Option<Resolution> {
        let resolution =
            self.turn
                .tick(&mut self.deck, &mut self.session, now_ms, &mut self.events)?;
        if let Resolution::Matched {
            completion: Some(done),
            ..
        } = resolution
        {
            self.last_completion = Some(done);
        }
        Some(resolution)
    }

    /// Deal a fresh board from any state.
    ///
    /// Cancels a pending resolution, reshuffles, and resets the round-scoped
    /// session fields. Best time and games played survive.
    pub fn restart(&mut self) {
        self.turn.reset();
        self.deck.redeal(&mut self.rng);
        self.session.reset();
        self.last_completion = None;
        self.round_id = self.round_id.wrapping_add(1);
        self.events.push(CoreEvent::RoundReset);
        info!(round = self.round_id, "board reshuffled");
    }

    /// Cancel outstanding timers before the application exits. Idempotent.
    pub fn shutdown(&mut self) {
        self.turn.cancel_pending();
    }

    /// Apply a player action.
    ///
    /// Returns true when the action changed the game.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Select(id) => self.select_card(id, now_ms).accepted(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => {
                self.shutdown();
                true
            }
        }
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CoreEvent> {
        self.events.drain(..)
    }

    /// Drain pending events into `presenter`, returning how many were delivered.
    pub fn dispatch_events<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> usize {
        let mut n = 0;
        for event in self.events.drain(..) {
            presenter.handle(&event);
            n += 1;
        }
        n
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut GameSnapshot) {
        out.cards.clear();
        for card in self.deck.cards().iter().take(MAX_CARDS) {
            out.cards.push(CardSnapshot::from(card));
        }
        out.columns = self.config.columns;
        out.n_pairs = self.deck.n_pairs();
        out.turn = self.turn.state();
        out.input_locked = self.turn.is_input_locked();
        out.phase = self.session.phase();
        out.matched_pairs = self.session.matched_pairs();
        out.total_games = self.session.total_games();
        out.best_time_ms = self.session.best_time_ms();
        out.elapsed_ms = self.session.live_elapsed(now_ms);
        out.resolve_remaining_ms = self.turn.resolve_remaining_ms(now_ms);
        out.last_completion = self.last_completion;
        out.round_id = self.round_id;
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
