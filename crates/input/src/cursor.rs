//! Keyboard focus over the card grid.
//!
//! The cursor clamps at the grid edges and never points past the last card,
//! even when the final row is short.

use crate::map::Direction;
use crate::types::CardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: u8,
    columns: u8,
    len: u8,
}

impl GridCursor {
    pub fn new(columns: u8, len: u8) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len,
        }
    }

    pub fn card_id(&self) -> Option<CardId> {
        (self.index < self.len).then_some(CardId(self.index))
    }

    pub fn row(&self) -> u8 {
        self.index / self.columns
    }

    pub fn col(&self) -> u8 {
        self.index % self.columns
    }

    /// Move one cell; returns false when already at the edge.
    pub fn step(&mut self, dir: Direction) -> bool {
        if self.len == 0 {
            return false;
        }
        let last = self.len - 1;
        let next = match dir {
            Direction::Left if self.col() > 0 => self.index - 1,
            Direction::Right if self.col() + 1 < self.columns && self.index < last => {
                self.index + 1
            }
            Direction::Up if self.row() > 0 => self.index - self.columns,
            Direction::Down if self.index + self.columns <= last => self.index + self.columns,
            _ => return false,
        };
        self.index = next;
        true
    }

    /// Point at a card (e.g. the one under the mouse). Out-of-range ids are ignored.
    pub fn focus(&mut self, id: CardId) {
        if id.0 < self.len {
            self.index = id.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_top_left() {
        let cursor = GridCursor::new(4, 16);
        assert_eq!(cursor.card_id(), Some(CardId(0)));
    }

    #[test]
    fn test_moves_and_clamps() {
        let mut cursor = GridCursor::new(4, 16);

        assert!(!cursor.step(Direction::Left));
        assert!(!cursor.step(Direction::Up));

        assert!(cursor.step(Direction::Right));
        assert!(cursor.step(Direction::Down));
        assert_eq!(cursor.card_id(), Some(CardId(5)));

        for _ in 0..10 {
            cursor.step(Direction::Right);
            cursor.step(Direction::Down);
        }
        assert_eq!(cursor.card_id(), Some(CardId(15)));
    }

    #[test]
    fn test_short_last_row() {
        // 6 cards in 4 columns: second row has ids 4 and 5 only.
        let mut cursor = GridCursor::new(4, 6);
        cursor.focus(CardId(3));

        assert!(!cursor.step(Direction::Down));
        cursor.focus(CardId(5));
        assert!(!cursor.step(Direction::Right));
    }

    #[test]
    fn test_focus_ignores_out_of_range() {
        let mut cursor = GridCursor::new(4, 4);
        cursor.focus(CardId(9));
        assert_eq!(cursor.card_id(), Some(CardId(0)));
    }
}
