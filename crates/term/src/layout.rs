//! Screen geometry for the board, sidebar, header and controls.
//!
//! Pure arithmetic: no drawing and no I/O. The same `BoardLayout` drives both
//! rendering and pointer hit-testing, so what is drawn is what is clickable.

use crate::types::CardId;

pub const CARD_W: u16 = 8;
pub const CARD_H: u16 = 3;
pub const GAP_X: u16 = 2;
pub const GAP_Y: u16 = 1;

pub const SIDEBAR_W: u16 = 20;
pub const SIDEBAR_MIN_H: u16 = 9;
const SIDEBAR_GAP: u16 = 3;

const HEADER_H: u16 = 2;
pub const BUTTON_W: u16 = 11;
pub const BUTTON_H: u16 = 3;
const BUTTON_GAP: u16 = 4;

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// On-screen control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Restart,
    Quit,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Restart => "RESTART",
            Control::Quit => "QUIT",
        }
    }
}

/// Result of a pointer hit-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Card(CardId),
    Control(Control),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    columns: u8,
    len: u8,
    pub header: Rect,
    pub sidebar: Rect,
    pub grid: Rect,
    pub instruction: Rect,
    pub restart: Rect,
    pub quit: Rect,
}

impl BoardLayout {
    /// Lay out `len` cards in `columns` columns, centred in a `width` x `height` viewport.
    ///
    /// Small viewports clip at the right and bottom edges instead of failing.
    pub fn compute(width: u16, height: u16, columns: u8, len: u8) -> Self {
        let columns = columns.max(1);
        let cols = columns.min(len.max(1)) as u16;
        let rows = (len as u16).div_ceil(columns as u16).max(1);

        let grid_w = cols * CARD_W + (cols - 1) * GAP_X;
        let grid_h = rows * CARD_H + (rows - 1) * GAP_Y;

        let content_w = grid_w.max(2 * BUTTON_W + BUTTON_GAP);
        let total_w = SIDEBAR_W + SIDEBAR_GAP + content_w;
        // header, blank, grid, blank, instruction, blank, buttons
        let total_h = HEADER_H + 1 + grid_h.max(SIDEBAR_MIN_H) + 1 + 1 + 1 + BUTTON_H;

        let origin_x = width.saturating_sub(total_w) / 2;
        let origin_y = height.saturating_sub(total_h) / 2;

        let content_x = origin_x + SIDEBAR_W + SIDEBAR_GAP;
        let grid_y = origin_y + HEADER_H + 1;

        let header = Rect::new(content_x, origin_y, content_w, HEADER_H);
        let grid = Rect::new(
            content_x + (content_w - grid_w) / 2,
            grid_y,
            grid_w,
            grid_h,
        );
        let sidebar = Rect::new(origin_x, grid_y, SIDEBAR_W, grid_h.max(SIDEBAR_MIN_H));

        let instruction_y = grid_y + grid_h.max(SIDEBAR_MIN_H) + 1;
        let instruction = Rect::new(origin_x, instruction_y, total_w, 1);

        let buttons_y = instruction_y + 2;
        let buttons_x = content_x + (content_w - (2 * BUTTON_W + BUTTON_GAP)) / 2;
        let restart = Rect::new(buttons_x, buttons_y, BUTTON_W, BUTTON_H);
        let quit = Rect::new(buttons_x + BUTTON_W + BUTTON_GAP, buttons_y, BUTTON_W, BUTTON_H);

        Self {
            columns,
            len,
            header,
            sidebar,
            grid,
            instruction,
            restart,
            quit,
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn card_rect(&self, id: CardId) -> Option<Rect> {
        if id.0 >= self.len {
            return None;
        }
        let col = id.col(self.columns) as u16;
        let row = id.row(self.columns) as u16;
        Some(Rect::new(
            self.grid.x + col * (CARD_W + GAP_X),
            self.grid.y + row * (CARD_H + GAP_Y),
            CARD_W,
            CARD_H,
        ))
    }

    pub fn control_rect(&self, control: Control) -> Rect {
        match control {
            Control::Restart => self.restart,
            Control::Quit => self.quit,
        }
    }

    /// Map a pointer position to whatever is under it.
    pub fn hit_test(&self, x: u16, y: u16, controls_visible: bool) -> Option<Hit> {
        if controls_visible {
            for control in [Control::Restart, Control::Quit] {
                if self.control_rect(control).contains(x, y) {
                    return Some(Hit::Control(control));
                }
            }
        }

        if !self.grid.contains(x, y) {
            return None;
        }
        let dx = x - self.grid.x;
        let dy = y - self.grid.y;
        // Gaps between cards hit nothing.
        if dx % (CARD_W + GAP_X) >= CARD_W || dy % (CARD_H + GAP_Y) >= CARD_H {
            return None;
        }
        let col = (dx / (CARD_W + GAP_X)) as u8;
        let row = (dy / (CARD_H + GAP_Y)) as u8;
        let id = CardId::from_grid(row, col, self.columns);
        (id.0 < self.len).then_some(Hit::Card(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> BoardLayout {
        BoardLayout::compute(80, 24, 4, 16)
    }

    #[test]
    fn test_standard_board_fits_80x24() {
        let l = standard();
        assert_eq!(l.grid.w, 38);
        assert_eq!(l.grid.h, 15);
        assert!(l.restart.bottom() <= 24);
        assert!(l.grid.right() <= 80);
        assert!(l.sidebar.right() < l.grid.x);
    }

    #[test]
    fn test_card_rects_tile_the_grid() {
        let l = standard();
        let first = l.card_rect(CardId(0)).unwrap();
        let last = l.card_rect(CardId(15)).unwrap();
        assert_eq!((first.x, first.y), (l.grid.x, l.grid.y));
        assert_eq!(last.right(), l.grid.right());
        assert_eq!(last.bottom(), l.grid.bottom());
        assert!(l.card_rect(CardId(16)).is_none());
    }

    #[test]
    fn test_hit_test_cards_and_gaps() {
        let l = standard();
        let r = l.card_rect(CardId(5)).unwrap();
        assert_eq!(l.hit_test(r.x, r.y, false), Some(Hit::Card(CardId(5))));
        assert_eq!(
            l.hit_test(r.right() - 1, r.bottom() - 1, false),
            Some(Hit::Card(CardId(5)))
        );
        // column gap right of the card, row gap below it
        assert_eq!(l.hit_test(r.right(), r.y, false), None);
        assert_eq!(l.hit_test(r.x, r.bottom(), false), None);
        assert_eq!(l.hit_test(0, 0, false), None);
    }

    #[test]
    fn test_controls_only_hit_when_visible() {
        let l = standard();
        let (x, y) = (l.restart.x + 1, l.restart.y + 1);
        assert_eq!(l.hit_test(x, y, false), None);
        assert_eq!(l.hit_test(x, y, true), Some(Hit::Control(Control::Restart)));
        assert_eq!(
            l.hit_test(l.quit.x, l.quit.y, true),
            Some(Hit::Control(Control::Quit))
        );
    }

    #[test]
    fn test_short_last_row_has_no_phantom_cards() {
        // 6 cards in 4 columns
        let l = BoardLayout::compute(80, 24, 4, 6);
        let r = l.card_rect(CardId(3)).unwrap();
        let below = r.bottom() + GAP_Y;
        assert_eq!(l.hit_test(r.x, below, false), None);
        assert!(l.card_rect(CardId(5)).is_some());
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let l = BoardLayout::compute(10, 5, 4, 16);
        assert_eq!(l.grid.x, SIDEBAR_W + 3);
        assert!(l.hit_test(0, 0, true).is_none());
    }
}
