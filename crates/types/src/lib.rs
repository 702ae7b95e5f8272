//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Grid Dimensions
//!
//! The default game is a 4x4 grid holding eight pairs:
//!
//! - **Columns**: 4 (`GRID_SIZE`)
//! - **Pairs**: 8 (`N_PAIRS`), each value appears on exactly two cards
//! - **Cards**: 16, addressed row-major by [`CardId`]
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed loop interval (~60 FPS) |
//! | `RESOLVE_DELAY_MS` | 800 | Delay before two candidates are evaluated |
//! | `STATIC_RENDER_INTERVAL_MS` | 250 | Minimum redraw interval while idle |
//!
//! # Examples
//!
//! ```
//! use recallflip_types::{CardId, CardState, Phase, GRID_SIZE, N_PAIRS};
//!
//! let id = CardId::from_grid(1, 2, GRID_SIZE);
//! assert_eq!(id.index(), 6);
//!
//! assert!(CardState::Matched.is_face_up());
//! assert!(!CardState::Hidden.is_face_up());
//!
//! assert_eq!(Phase::default(), Phase::NotStarted);
//! assert_eq!(N_PAIRS, 8);
//! ```

/// Grid width in cards (4 columns)
pub const GRID_SIZE: u8 = 4;

/// Number of distinct card values in the default deck (8 pairs)
pub const N_PAIRS: u8 = 8;

/// Largest deck the fixed-capacity snapshots can describe
pub const MAX_PAIRS: u8 = 8;

/// Maximum number of cards on the board
pub const MAX_CARDS: usize = (MAX_PAIRS as usize) * 2;

/// Fixed loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the second flip of a turn and its resolution
pub const RESOLVE_DELAY_MS: u64 = 800;

/// Redraw interval floor while nothing is moving on screen
pub const STATIC_RENDER_INTERVAL_MS: u64 = 250;


/// Stable identifier of a card: its row-major grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

impl CardId {
    /// Build an id from a grid position.
    pub fn from_grid(row: u8, col: u8, cols: u8) -> Self {
        CardId(row * cols + col)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self, cols: u8) -> u8 {
        self.0 / cols
    }

    pub fn col(self, cols: u8) -> u8 {
        self.0 % cols
    }
}

/// Visibility of a single card.
///
/// - **Hidden**: face down, selectable
/// - **Revealed**: face up as a candidate of the current turn
/// - **Matched**: face up for the rest of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl CardState {
    /// Whether the card's value is shown.
    pub fn is_face_up(&self) -> bool {
        !matches!(self, CardState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Hidden => "hidden",
            CardState::Revealed => "revealed",
            CardState::Matched => "matched",
        }
    }
}

/// Lifecycle of one round as seen by the session tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Board dealt, clock not running yet
    #[default]
    NotStarted,
    /// First card selected, clock running
    Running,
    /// All pairs matched, clock stopped
    Complete,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Phase::Complete)
    }

    /// Status line shown in the sidebar.
    pub fn status_text(&self) -> &'static str {
        match self {
            Phase::NotStarted => "Ready to Start",
            Phase::Running => "Game Running",
            Phase::Complete => "Game Complete",
        }
    }

    /// Hint shown under the grid.
    pub fn instruction_text(&self) -> &'static str {
        match self {
            Phase::NotStarted => "Select any card to start the game!",
            Phase::Running => "Match the pairs of identical cards!",
            Phase::Complete => "Press RESTART to play again or QUIT to leave",
        }
    }
}

/// State of the turn controller.
///
/// The cycle goes: Idle → OneSelected → AwaitingResolution → Idle, until the
/// final match parks the controller in RoundOver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnState {
    /// No candidate, input open
    #[default]
    Idle,
    /// One candidate revealed, input open
    OneSelected,
    /// Two candidates revealed, input locked until the delay elapses
    AwaitingResolution,
    /// Every pair matched; only a restart is accepted
    RoundOver,
}

/// Actions the player can apply to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the given card
    Select(CardId),
    /// Deal a new round
    Restart,
    /// Leave the application
    Quit,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Completion {
    pub duration_ms: u64,
    /// The duration strictly improved the previous best, or no best existed.
    pub is_new_best: bool,
}

/// Event emitted by the core for the presentation layer.
///
/// Events are buffered by the game and drained by the frontend once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    CardStateChanged { id: CardId, state: CardState },
    /// A card was flipped over; play the flip sound.
    FlipCue,
    RoundStarted,
    RoundCompleted(Completion),
    RoundReset,
}
