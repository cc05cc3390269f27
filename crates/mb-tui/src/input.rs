//! Input handling - convert key events to birth keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mb_core::birth::BirthKey;

/// Convert a key event to a birth key.
///
/// Returns `None` for key releases so a key is never seen twice.
pub fn key_to_birth_key(key: KeyEvent) -> Option<BirthKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl key combos
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(match key.code {
            KeyCode::Char('x') | KeyCode::Char('c') => BirthKey::Quit,
            KeyCode::Char('m') => BirthKey::ManualOverride,
            _ => BirthKey::Other,
        });
    }

    let birth_key = match key.code {
        KeyCode::Up => BirthKey::Up,
        KeyCode::Down => BirthKey::Down,
        KeyCode::Left => BirthKey::Left,
        KeyCode::Right => BirthKey::Right,
        KeyCode::Enter => BirthKey::Enter,
        KeyCode::Esc => BirthKey::Escape,
        KeyCode::Char(c) => BirthKey::Char(c),
        _ => BirthKey::Other,
    };
    Some(birth_key)
}
