//! Terminal presentation for the memory game.
//!
//! A small, game-oriented rendering layer: widgets draw into a framebuffer
//! that is flushed to the terminal by diffing against the previous frame.
//!
//! - `layout` owns geometry and pointer hit-testing
//! - `widgets` implement [`Render`] for each board element
//! - `game_view` composes a whole frame from a `GameSnapshot`
//! - `presenter` consumes core events (redraws, flip-cue bell)

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod presenter;
pub mod render_throttle;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use recallflip_core as core;
pub use recallflip_types as types;

pub use fb::{BoxStyle, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewState, Viewport};
pub use layout::{BoardLayout, Control, Hit, Rect};
pub use presenter::TerminalPresenter;
pub use render_throttle::RenderThrottle;
pub use renderer::TerminalRenderer;
pub use theme::format_time;
pub use widgets::{
    ButtonWidget, CardWidget, CompletionOverlay, Header, InstructionLine, Render, Sidebar,
};
