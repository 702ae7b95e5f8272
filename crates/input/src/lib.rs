//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key and
//! mouse events into input actions and pointer positions, and tracks the
//! keyboard focus cursor over the card grid.

pub mod cursor;
pub mod map;

pub use recallflip_types as types;

pub use cursor::GridCursor;
pub use map::{
    handle_key_event, handle_mouse_event, should_quit, Direction, InputAction, PointerEvent,
};
