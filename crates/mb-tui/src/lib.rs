//! mb-tui: terminal frontend for character birth
//!
//! Renders the birth screens with ratatui and reads keys through
//! crossterm.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{CrosstermEvents, EventSource, TerminalGuard, TerminalUi};
pub use config::Config;
pub use theme::Theme;
