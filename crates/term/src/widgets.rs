//! Drawable pieces of the board.
//!
//! Each widget is a small value built fresh every frame from the snapshot and
//! the layout. Widgets never read game state directly.

use core::fmt::Write;

use arrayvec::ArrayString;

use crate::fb::{BoxStyle, CellStyle, FrameBuffer, Rgb};
use crate::layout::{Control, Rect};
use crate::theme::{self, format_time};
use crate::types::{CardState, Completion, Phase};

/// Anything that can draw itself into a framebuffer.
pub trait Render {
    fn render(&self, fb: &mut FrameBuffer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardWidget {
    pub rect: Rect,
    pub value: u8,
    pub state: CardState,
    pub focused: bool,
}

impl Render for CardWidget {
    fn render(&self, fb: &mut FrameBuffer) {
        let Rect { x, y, w, h } = self.rect;

        match self.state {
            CardState::Hidden => {
                let pattern = CellStyle::new(Rgb::new(130, 140, 250), theme::CARD_BACK);
                let border = CellStyle::new(theme::WHITE, theme::CARD_BACK).dim();
                fb.fill_rect(x, y, w, h, '░', pattern);
                fb.draw_box(x, y, w, h, BoxStyle::Rounded, border);
            }
            CardState::Revealed | CardState::Matched => {
                let face = theme::card_color(self.value);
                fb.fill_rect(x, y, w, h, ' ', CellStyle::new(theme::WHITE, face));
                let (kind, border) = if self.state == CardState::Matched {
                    (BoxStyle::Heavy, CellStyle::new(theme::GREEN, face).bold())
                } else {
                    (BoxStyle::Rounded, CellStyle::new(theme::WHITE, face))
                };
                fb.draw_box(x, y, w, h, kind, border);

                let mut label = ArrayString::<4>::new();
                let _ = write!(label, "{}", self.value);
                let text = CellStyle::new(theme::WHITE, face).bold();
                fb.put_str_centered(x, y + h / 2, w, &label, text);
            }
        }

        if self.focused && x > 0 {
            fb.put_char(x - 1, y + h / 2, '▶', theme::text(theme::GOLD).bold());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonWidget {
    pub rect: Rect,
    pub control: Control,
    pub hovered: bool,
}

impl Render for ButtonWidget {
    fn render(&self, fb: &mut FrameBuffer) {
        let Rect { x, y, w, h } = self.rect;
        let bg = if self.hovered {
            theme::BUTTON_HOVER
        } else {
            theme::BUTTON
        };
        let style = CellStyle::new(theme::WHITE, bg);

        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, BoxStyle::Rounded, style);
        fb.put_str_centered(x, y + h / 2, w, self.control.label(), style.bold());
    }
}

/// Title plus the `Matched: k/n` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rect: Rect,
    pub matched_pairs: u8,
    pub n_pairs: u8,
}

pub const TITLE: &str = "RECALLFLIP";

impl Render for Header {
    fn render(&self, fb: &mut FrameBuffer) {
        let Rect { x, y, w, .. } = self.rect;
        fb.put_str_centered(x, y, w, TITLE, theme::text(theme::TITLE).bold());

        let mut matched = ArrayString::<24>::new();
        let _ = write!(matched, "Matched: {}/{}", self.matched_pairs, self.n_pairs);
        fb.put_str_centered(x, y + 1, w, &matched, theme::text(theme::WHITE));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    pub rect: Rect,
    pub elapsed_ms: u64,
    pub best_time_ms: Option<u64>,
    pub total_games: u32,
    pub phase: Phase,
}

impl Render for Sidebar {
    fn render(&self, fb: &mut FrameBuffer) {
        let Rect { x, y, w, h } = self.rect;
        let panel = CellStyle::new(theme::WHITE, theme::PANEL);
        fb.fill_rect(x, y, w, h, ' ', panel);
        let border = CellStyle::new(theme::CARD_BACK, theme::PANEL);
        let title = CellStyle::new(theme::GOLD, theme::PANEL).bold();
        fb.draw_box(x, y, w, h, BoxStyle::Rounded, border);
        fb.put_str_centered(x, y, w, " GAME INFO ", title);

        let left = x + 2;

        let label = CellStyle::new(theme::SKY, theme::PANEL);
        fb.put_str(left, y + 2, "Time: ", label);
        fb.put_str(left + 6, y + 2, &format_time(self.elapsed_ms), label);

        let label = CellStyle::new(theme::GOLD, theme::PANEL);
        fb.put_str(left, y + 3, "Best: ", label);
        match self.best_time_ms {
            Some(best) => fb.put_str(left + 6, y + 3, &format_time(best), label),
            None => fb.put_str(left + 6, y + 3, theme::BEST_PLACEHOLDER, label),
        }

        let label = CellStyle::new(theme::LAVENDER, theme::PANEL);
        fb.put_str(left, y + 4, "Games: ", label);
        fb.put_u32(left + 7, y + 4, self.total_games, label);

        let status = CellStyle::new(phase_color(self.phase), theme::PANEL).bold();
        fb.put_str(left, y + 6, self.phase.status_text(), status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionLine {
    pub rect: Rect,
    pub phase: Phase,
}

impl Render for InstructionLine {
    fn render(&self, fb: &mut FrameBuffer) {
        let color = match self.phase {
            Phase::Running => Rgb::new(200, 220, 255),
            other => phase_color(other),
        };
        fb.put_str_centered(
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.phase.instruction_text(),
            theme::text(color),
        );
    }
}

/// End-of-round banner drawn over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOverlay {
    pub area: Rect,
    pub completion: Completion,
}

const OVERLAY_W: u16 = 30;
const OVERLAY_H: u16 = 7;

impl Render for CompletionOverlay {
    fn render(&self, fb: &mut FrameBuffer) {
        let w = OVERLAY_W;
        let x = self.area.x + self.area.w.saturating_sub(w) / 2;
        let y = self.area.y + self.area.h.saturating_sub(OVERLAY_H) / 2;

        let bg = CellStyle::new(theme::WHITE, theme::OVERLAY);
        fb.fill_rect(x, y, w, OVERLAY_H, ' ', bg);
        let green = CellStyle::new(theme::GREEN, theme::OVERLAY);
        fb.draw_box(x, y, w, OVERLAY_H, BoxStyle::Heavy, green);
        fb.put_str_centered(x, y + 1, w, "CONGRATULATIONS!", green.bold());

        let mut final_time = ArrayString::<40>::new();
        let _ = write!(
            final_time,
            "Final Time: {}",
            format_time(self.completion.duration_ms)
        );
        let sky = CellStyle::new(theme::SKY, theme::OVERLAY);
        fb.put_str_centered(x, y + 3, w, &final_time, sky);

        if self.completion.is_new_best {
            let gold = CellStyle::new(theme::GOLD, theme::OVERLAY).bold();
            fb.put_str_centered(x, y + 5, w, "NEW BEST TIME!", gold);
        }
    }
}

fn phase_color(phase: Phase) -> Rgb {
    match phase {
        Phase::NotStarted => theme::TITLE,
        Phase::Running => theme::SKY,
        Phase::Complete => theme::GREEN,
    }
}
