//! Terminal frontend for the birth flow
//!
//! [`TerminalUi`] paints birth screens with ratatui and turns crossterm
//! key events into [`BirthKey`]s.

use std::collections::VecDeque;
use std::io::{self, Stdout};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mb_core::BirthError;
use mb_core::birth::{BirthKey, BirthScreen, BirthUi};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::trace;

use crate::input::key_to_birth_key;
use crate::theme::Theme;
use crate::widgets::ScreenWidget;

/// Source of terminal events
pub trait EventSource {
    fn read(&mut self) -> io::Result<Event>;
}

/// Blocking reads from the crossterm event queue
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Replays queued events; runs dry with an `UnexpectedEof` error
impl EventSource for VecDeque<Event> {
    fn read(&mut self) -> io::Result<Event> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
    }
}

/// Birth frontend drawing into a ratatui terminal
pub struct TerminalUi<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    theme: Theme,
    /// Last screen drawn, repainted on resize
    last: Option<BirthScreen>,
}

impl<B: Backend, E: EventSource> TerminalUi<B, E> {
    pub fn new(terminal: Terminal<B>, events: E, theme: Theme) -> Self {
        Self {
            terminal,
            events,
            theme,
            last: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn repaint(&mut self) -> io::Result<()> {
        let Some(screen) = &self.last else {
            return Ok(());
        };
        let theme = &self.theme;
        self.terminal
            .draw(|frame| frame.render_widget(ScreenWidget::new(screen, theme), frame.area()))?;
        Ok(())
    }
}

impl<B: Backend, E: EventSource> BirthUi for TerminalUi<B, E> {
    fn draw(&mut self, screen: &BirthScreen) -> Result<(), BirthError> {
        self.last = Some(screen.clone());
        self.repaint()?;
        Ok(())
    }

    fn next_key(&mut self) -> Result<BirthKey, BirthError> {
        loop {
            match self.events.read()? {
                Event::Key(key) => {
                    if let Some(birth_key) = key_to_birth_key(key) {
                        trace!(?birth_key, "key");
                        return Ok(birth_key);
                    }
                }
                Event::Resize(..) => {
                    self.terminal.autoresize()?;
                    self.repaint()?;
                }
                _ => {}
            }
        }
    }
}

/// Raw-mode alternate screen, restored when dropped
pub struct TerminalGuard {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal: Some(terminal),
        })
    }

    /// Hand the terminal to a frontend. The screen is still restored when
    /// this guard drops.
    pub fn take(&mut self) -> Option<Terminal<CrosstermBackend<Stdout>>> {
        self.terminal.take()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_util::row_text;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use mb_core::birth::QuickPrompt;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ui(events: Vec<Event>) -> TerminalUi<TestBackend, VecDeque<Event>> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TerminalUi::new(terminal, events.into(), Theme::dark())
    }

    #[test]
    fn test_draw_paints_screen() {
        let mut ui = ui(vec![]);
        ui.draw(&BirthScreen::QuickStart(QuickPrompt::Ask)).unwrap();
        let buf = ui.terminal().backend().buffer();
        assert!(row_text(buf, 2).contains("Quick-start character"));
    }

    #[test]
    fn test_next_key_skips_non_keys() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let mut ui = ui(vec![
            Event::FocusGained,
            Event::Key(release),
            Event::Resize(80, 24),
            key(KeyCode::Char('y')),
        ]);
        ui.draw(&BirthScreen::QuickStart(QuickPrompt::Ask)).unwrap();
        assert_eq!(ui.next_key().unwrap(), BirthKey::Char('y'));
    }

    #[test]
    fn test_exhausted_events_are_io_errors() {
        let mut ui = ui(vec![]);
        assert!(matches!(ui.next_key(), Err(BirthError::Io(_))));
    }
}
