//! Session tracker - counters that outlive a single round
//!
//! Tracks games played and the best completion time for the lifetime of the
//! process, plus the round-scoped clock, matched-pair count and phase.
//! Nothing here is persisted.

use tracing::{debug, info};

use crate::types::{Completion, Phase};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    total_games: u32,
    best_time_ms: Option<u64>,
    current_time_ms: u64,
    matched_pairs: u8,
    phase: Phase,
    start_ms: u64,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn best_time_ms(&self) -> Option<u64> {
        self.best_time_ms
    }

    /// Duration of the last completed round, or 0 before any completion.
    ///
    /// Use [`live_elapsed`](Self::live_elapsed) for the running clock.
    pub fn current_time_ms(&self) -> u64 {
        self.current_time_ms
    }

    pub fn matched_pairs(&self) -> u8 {
        self.matched_pairs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start the clock for a new round.
    ///
    /// Rejected (returns false) while a round is already running.
    pub fn start_round(&mut self, now_ms: u64) -> bool {
        if self.phase.is_running() {
            debug!("start_round ignored: round already running");
            return false;
        }
        self.matched_pairs = 0;
        self.current_time_ms = 0;
        self.phase = Phase::Running;
        self.total_games = self.total_games.saturating_add(1);
        self.start_ms = now_ms;
        info!(game = self.total_games, "round started");
        true
    }

    pub fn record_match(&mut self) -> u8 {
        self.matched_pairs = self.matched_pairs.saturating_add(1);
        self.matched_pairs
    }

    /// Stop the clock with the given duration.
    ///
    /// Rejected (returns `None`) unless a round is running. The new-best flag is
    /// decided before the best time is overwritten: the first completion, or a
    /// strictly faster one, is a new best; a tie is not.
    pub fn complete_round(&mut self, duration_ms: u64) -> Option<Completion> {
        if !self.phase.is_running() {
            debug!(phase = ?self.phase, "complete_round ignored: no round running");
            return None;
        }

        let is_new_best = self.best_time_ms.map_or(true, |best| duration_ms < best);
        if is_new_best {
            self.best_time_ms = Some(duration_ms);
        }
        self.current_time_ms = duration_ms;
        self.phase = Phase::Complete;

        info!(duration_ms, is_new_best, "round complete");
        Some(Completion {
            duration_ms,
            is_new_best,
        })
    }

    /// Running clock while a round is in progress, else the stored time.
    pub fn live_elapsed(&self, now_ms: u64) -> u64 {
        if self.phase.is_running() {
            now_ms.saturating_sub(self.start_ms)
        } else {
            self.current_time_ms
        }
    }

    /// Back to NotStarted; best time and games played are kept.
    pub fn reset(&mut self) {
        self.matched_pairs = 0;
        self.current_time_ms = 0;
        self.phase = Phase::NotStarted;
        self.start_ms = 0;
    }
}
