//! Mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for, before it is bound to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the focus cursor over the grid
    Move(Direction),
    /// Flip the focused card
    Select,
    Restart,
    Quit,
}

/// Pointer activity in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: u16, y: u16 },
    Moved { x: u16, y: u16 },
}

/// Map keyboard input to an input action.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if should_quit(key) {
        return Some(InputAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(InputAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(InputAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(InputAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(InputAction::Move(Direction::Down))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Select),

        KeyCode::Char('r' | 'R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map mouse input to pointer events. Only the left button counts as a press.
pub fn handle_mouse_event(event: MouseEvent) -> Option<PointerEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down {
            x: event.column,
            y: event.row,
        }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Moved {
            x: event.column,
            y: event.row,
        }),
        _ => None,
    }
}
