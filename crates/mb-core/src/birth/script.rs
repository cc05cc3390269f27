//! Scripted frontend
//!
//! Feeds a fixed key sequence to the birth flow and records every screen.
//! Used by tests and by headless runs of the binary.

use std::collections::VecDeque;
use std::io;

use thiserror::Error;

use crate::error::BirthError;

use super::ui::{BirthKey, BirthScreen, BirthUi};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key token <{0}>")]
    UnknownToken(String),

    #[error("unterminated key token")]
    Unterminated,
}

/// Frontend that replays queued keys
#[derive(Debug, Default)]
pub struct ScriptedUi {
    keys: VecDeque<BirthKey>,
    screens: Vec<BirthScreen>,
    options_opened: usize,
}

impl ScriptedUi {
    pub fn new(keys: impl IntoIterator<Item = BirthKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            screens: Vec::new(),
            options_opened: 0,
        }
    }

    /// Build from a key script (see [`parse_keys`])
    pub fn from_script(script: &str) -> Result<Self, ScriptError> {
        Ok(Self::new(parse_keys(script)?))
    }

    /// Every screen drawn so far
    pub fn screens(&self) -> &[BirthScreen] {
        &self.screens
    }

    pub fn last_screen(&self) -> Option<&BirthScreen> {
        self.screens.last()
    }

    /// Times the birth options were requested
    pub fn options_opened(&self) -> usize {
        self.options_opened
    }

    /// Keys not yet consumed
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl BirthUi for ScriptedUi {
    fn draw(&mut self, screen: &BirthScreen) -> Result<(), BirthError> {
        self.screens.push(screen.clone());
        Ok(())
    }

    fn next_key(&mut self) -> Result<BirthKey, BirthError> {
        self.keys.pop_front().ok_or_else(|| {
            BirthError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key script exhausted",
            ))
        })
    }

    fn birth_options(&mut self) -> Result<(), BirthError> {
        self.options_opened += 1;
        Ok(())
    }
}

/// Parse a key script.
///
/// Plain characters stand for themselves; named keys go in angle
/// brackets: `<up>`, `<down>`, `<left>`, `<right>`, `<enter>`, `<esc>`,
/// `<quit>` (Ctrl-X), `<lt>` for a literal '<'. Whitespace is skipped.
pub fn parse_keys(script: &str) -> Result<Vec<BirthKey>, ScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.chars();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('>') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(ScriptError::Unterminated),
                    }
                }
                keys.push(named_key(&name)?);
            }
            c if c.is_whitespace() => {}
            c => keys.push(BirthKey::Char(c)),
        }
    }

    Ok(keys)
}

fn named_key(name: &str) -> Result<BirthKey, ScriptError> {
    let key = match name.to_ascii_lowercase().as_str() {
        "up" => BirthKey::Up,
        "down" => BirthKey::Down,
        "left" => BirthKey::Left,
        "right" => BirthKey::Right,
        "enter" | "ret" => BirthKey::Enter,
        "esc" => BirthKey::Escape,
        "quit" | "^x" => BirthKey::Quit,
        "space" => BirthKey::Char(' '),
        "lt" => BirthKey::Char('<'),
        _ => return Err(ScriptError::UnknownToken(name.to_string())),
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_named() {
        let keys = parse_keys("ab <enter><ESC> *<up><quit>").unwrap();
        assert_eq!(
            keys,
            vec![
                BirthKey::Char('a'),
                BirthKey::Char('b'),
                BirthKey::Enter,
                BirthKey::Escape,
                BirthKey::Char('*'),
                BirthKey::Up,
                BirthKey::Quit,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_keys("<bogus>"),
            Err(ScriptError::UnknownToken("bogus".to_string()))
        );
        assert_eq!(parse_keys("a<ent"), Err(ScriptError::Unterminated));
    }

    #[test]
    fn test_exhausted_script_is_io_error() {
        let mut ui = ScriptedUi::new([BirthKey::Enter]);
        assert_eq!(ui.next_key().unwrap(), BirthKey::Enter);
        assert_eq!(ui.remaining(), 0);
        assert!(matches!(ui.next_key(), Err(BirthError::Io(_))));
    }
}
