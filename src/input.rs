//! Keyboard mapping and per-frame input sampling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserInput {
    Left,
    Right,
    Up,
    Down,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(UserInput),
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }
    let dir = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => UserInput::Left,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => UserInput::Right,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => UserInput::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => UserInput::Down,
        _ => return None,
    };
    Some(KeyAction::Move(dir))
}

/// Keeps the most recent direction seen during a frame.
#[derive(Debug, Default)]
pub struct InputSampler {
    latest: UserInput,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, input: UserInput) {
        if input != UserInput::None {
            self.latest = input;
        }
    }

    /// Hands out this frame's sample and resets for the next one.
    pub fn take(&mut self) -> UserInput {
        std::mem::take(&mut self.latest)
    }
}
