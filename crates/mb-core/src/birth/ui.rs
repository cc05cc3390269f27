//! The seam between birth logic and a frontend
//!
//! Stage handlers build a [`BirthScreen`], hand it to [`BirthUi::draw`],
//! then block on [`BirthUi::next_key`].

use crate::error::BirthError;
use crate::player::{MAX_BIRTH_POINTS, RollerResult, STAT_MAX, Stat};

use super::cascade::CascadeStep;

/// Input event as seen by the birth screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthKey {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// Global quit (Ctrl-X)
    Quit,
    /// Manual override (Ctrl-M), reserved for the server list
    ManualOverride,
    Other,
}

/// Frontend for the birth flow
pub trait BirthUi {
    /// Paint a full birth screen
    fn draw(&mut self, screen: &BirthScreen) -> Result<(), BirthError>;

    /// Block until the next key
    fn next_key(&mut self) -> Result<BirthKey, BirthError>;

    /// Show the birth options screen. The menu question is asked again
    /// afterwards.
    fn birth_options(&mut self) -> Result<(), BirthError> {
        Ok(())
    }
}

/// Instructions shown above the cascade menus
pub const MENU_INSTRUCTIONS: [&str; 4] = [
    "Please select your character traits from the menus below:",
    "Use the movement keys to scroll the menu, Enter to select the current menu",
    "item, '*' for a random menu item, 'ESC' to step back through the birth",
    "process, '=' for the birth options, or 'Ctrl-X' to quit.",
];

/// Everything a frontend needs to paint one birth screen
#[derive(Debug, Clone, PartialEq)]
pub enum BirthScreen {
    QuickStart(QuickPrompt),
    Menus(MenusView),
    PointBased(PointBasedView),
    Standard(StandardView),
    Confirm(ConfirmView),
}

/// Quick-start prompt phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPrompt {
    /// "Quick-start character based on previous one (y/n)?"
    Ask,
    /// Last chance to quit or start over
    Confirm,
}

/// Snapshot of one cascade menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub step: CascadeStep,
    pub items: Vec<String>,
    pub cursor: usize,
}

/// The cascade: answered menus to the left, the active one last
#[derive(Debug, Clone, PartialEq)]
pub struct MenusView {
    pub menus: Vec<MenuView>,
    pub hint: &'static str,
    /// Help panel for the highlighted choice of the active menu
    pub help: Vec<String>,
}

impl MenusView {
    pub fn active(&self) -> Option<&MenuView> {
        self.menus.last()
    }
}

/// Name, sex, race and class as shown on the roller and confirm screens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSummary {
    pub name: String,
    pub sex: String,
    pub race: String,
    pub class: String,
}

/// One row of the point-based table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRow {
    pub stat: Stat,
    pub value: u8,
    /// Value after race and class adjustments
    pub best: i32,
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointBasedView {
    pub summary: CharacterSummary,
    pub rows: Vec<PointRow>,
    pub total_cost: u32,
    pub cursor: usize,
}

impl PointBasedView {
    pub const POOL: u32 = MAX_BIRTH_POINTS;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardView {
    pub summary: CharacterSummary,
    /// Stats assigned so far, in slot order
    pub placed: Vec<Stat>,
    /// Stats still available, keyed by [`Stat::letter`]
    pub available: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmView {
    pub summary: CharacterSummary,
    pub stats: RollerResult,
    /// Combined race and class adjustment per stat
    pub adjustments: [i32; STAT_MAX],
}
