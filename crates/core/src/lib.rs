//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic.
//! It has **no dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: A fixed seed or explicit deck reproduces a whole game
//! - **Testable**: Time is passed in as milliseconds; nothing sleeps
//! - **Portable**: Drives a terminal frontend or a headless test alike
//!
//! # Module Structure
//!
//! - [`card`]: One grid cell with its three-state flip tag
//! - [`deck`]: Shuffled board where every value appears exactly twice
//! - [`rng`]: Seedable shuffling source
//! - [`timer`]: Cancellable one-shot deadline for the flip-back delay
//! - [`turn`]: The select/resolve state machine
//! - [`session`]: Games played, best time, the round clock and phase
//! - [`game`]: Owns all of the above for one board
//! - [`snapshot`]: Copy of the state for rendering
//! - [`presenter`]: Port through which frontends receive core events
//!
//! # Game Rules
//!
//! - A turn flips two cards. Equal values stay face up as a matched pair.
//! - Unequal cards flip back after 800ms; input is locked meanwhile.
//! - The clock starts with the first flip and stops on the last match.
//! - The best time is the fastest completed round since the process started.
//!
//! # Example
//!
//! ```
//! use recallflip_core::{Game, GameConfig};
//! use recallflip_types::{CardId, CardState, Phase};
//!
//! // Two pairs laid out as A B B A.
//! let mut game = Game::with_deck(GameConfig::default(), &[1, 2, 2, 1]).unwrap();
//!
//! game.select_card(CardId(0), 0);
//! game.select_card(CardId(3), 100);
//! assert!(game.is_input_locked());
//!
//! // Resolution happens on the first tick after the delay.
//! game.tick(900);
//! assert_eq!(game.card_state(CardId(0)), Some(CardState::Matched));
//! assert_eq!(game.matched_pairs(), 1);
//! assert_eq!(game.phase(), Phase::Running);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game::Game::tick) every frame with a monotonic
//! timestamp in milliseconds. The resolve delay is checked against that clock,
//! so a frame that arrives late resolves late instead of blocking.

pub mod card;
pub mod config;
pub mod deck;
pub mod game;
pub mod presenter;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;
pub mod turn;

pub use recallflip_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use config::GameConfig;
pub use deck::Deck;
pub use game::Game;
pub use presenter::Presenter;
pub use rng::DeckRng;
pub use session::SessionTracker;
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use timer::{ResolveTimer, TimerToken};
pub use turn::{RejectReason, Resolution, SelectOutcome, TurnController};
