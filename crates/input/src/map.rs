//! Key mapping from terminal events to driver actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;
use crate::Action;

/// Map a key press to an action. Releases and repeats map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(Action::Quit);
    }

    let action = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => GameAction::MoveDown,

        // Rotation (accepted, no effect)
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => GameAction::Rotate,

        KeyCode::Char(' ') | KeyCode::Enter => GameAction::EnsurePiece,

        _ => return None,
    };
    Some(Action::Control(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
