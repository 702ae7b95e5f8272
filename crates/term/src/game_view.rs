//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::layout::{BoardLayout, Control};
use crate::theme;
use crate::types::CardId;
use crate::widgets::{
    ButtonWidget, CardWidget, CompletionOverlay, Header, InstructionLine, Render, Sidebar,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Frontend-only state that is not part of the game: keyboard focus and pointer hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewState {
    pub focus: Option<CardId>,
    pub hover: Option<Control>,
}

/// A lightweight terminal renderer for the memory board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Geometry for this snapshot in this viewport. Used for hit-testing too.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        BoardLayout::compute(
            viewport.width,
            viewport.height,
            snap.columns,
            snap.cards.len() as u8,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        view: ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(theme::WHITE, theme::BACKGROUND),
        });

        let layout = self.layout(snap, viewport);

        Header {
            rect: layout.header,
            matched_pairs: snap.matched_pairs,
            n_pairs: snap.n_pairs,
        }
        .render(fb);

        Sidebar {
            rect: layout.sidebar,
            elapsed_ms: snap.elapsed_ms,
            best_time_ms: snap.best_time_ms,
            total_games: snap.total_games,
            phase: snap.phase,
        }
        .render(fb);

        for card in &snap.cards {
            let Some(rect) = layout.card_rect(card.id) else {
                continue;
            };
            CardWidget {
                rect,
                value: card.value,
                state: card.state,
                focused: view.focus == Some(card.id),
            }
            .render(fb);
        }

        InstructionLine {
            rect: layout.instruction,
            phase: snap.phase,
        }
        .render(fb);

        if snap.controls_visible() {
            for control in [Control::Restart, Control::Quit] {
                ButtonWidget {
                    rect: layout.control_rect(control),
                    control,
                    hovered: view.hover == Some(control),
                }
                .render(fb);
            }

            if let Some(completion) = snap.last_completion {
                CompletionOverlay {
                    area: layout.grid,
                    completion,
                }
                .render(fb);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, view: ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, view, viewport, &mut fb);
        fb
    }
}
