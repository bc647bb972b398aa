//! Input events as the deck sees them, and their translation from crossterm.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab,
    Enter,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Wheel ticks; positive scrolls down (toward the next slide).
    Wheel(i32),
    /// Left click at a cell.
    Click { column: usize, row: usize },
    Resize { width: usize, height: usize },
    ToggleFullscreen,
    Quit,
}

impl InputEvent {
    /// Translate a crossterm event. Returns None for events the deck ignores
    /// (key releases, unmapped keys, mouse moves).
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            Event::Resize(w, h) => Some(InputEvent::Resize {
                width: usize::from(*w),
                height: usize::from(*h),
            }),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
            KeyCode::Char('f') | KeyCode::Char('F') => InputEvent::ToggleFullscreen,
            KeyCode::Char(' ') => InputEvent::Key(Key::Space),
            KeyCode::Up => InputEvent::Key(Key::Up),
            KeyCode::Down => InputEvent::Key(Key::Down),
            KeyCode::Left => InputEvent::Key(Key::Left),
            KeyCode::Right => InputEvent::Key(Key::Right),
            KeyCode::Home => InputEvent::Key(Key::Home),
            KeyCode::End => InputEvent::Key(Key::End),
            KeyCode::PageUp => InputEvent::Key(Key::PageUp),
            KeyCode::PageDown => InputEvent::Key(Key::PageDown),
            KeyCode::Tab => InputEvent::Key(Key::Tab),
            KeyCode::BackTab => InputEvent::Key(Key::BackTab),
            KeyCode::Enter => InputEvent::Key(Key::Enter),
            _ => return None,
        };
        Some(event)
    }

    fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(InputEvent::Wheel(1)),
            MouseEventKind::ScrollUp => Some(InputEvent::Wheel(-1)),
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                column: usize::from(mouse.column),
                row: usize::from(mouse.row),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_nav_input.rs"]
mod tests;
