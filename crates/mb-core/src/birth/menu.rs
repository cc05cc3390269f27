//! Single-question menu driver
//!
//! One [`MenuChoiceSet`] per question. [`select_one`] draws it to the
//! right of the already-answered menus and blocks until the player
//! commits, steps back or quits.

use tracing::{debug, trace};

use crate::error::BirthError;
use crate::rng::ChoiceRng;

use super::cascade::CascadeStep;
use super::help::BrowseHelp;
use super::ui::{BirthKey, BirthScreen, BirthUi, MenuView, MenusView};

/// Result of one menu question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Player committed the highlighted entry
    Selected(usize),
    /// Player asked for a random entry; already committed
    Random(usize),
    Back,
    /// Player asked for the birth options; nothing committed
    Options,
    Quit,
}

/// Labels of one menu question, with its cursor and help strategy.
///
/// The cursor always lies inside `0..len()` for a non-empty set.
pub struct MenuChoiceSet<'a> {
    step: CascadeStep,
    labels: Vec<String>,
    help: Option<Box<dyn BrowseHelp + 'a>>,
    cursor: usize,
    allow_random: bool,
}

impl<'a> MenuChoiceSet<'a> {
    pub fn new(step: CascadeStep, labels: Vec<String>) -> Self {
        Self {
            step,
            labels,
            help: None,
            cursor: 0,
            allow_random: step.allows_random(),
        }
    }

    pub fn with_help(mut self, help: impl BrowseHelp + 'a) -> Self {
        self.help = Some(Box::new(help));
        self
    }

    /// Start at `cursor`, falling back to the first entry when out of range
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = if cursor < self.labels.len() { cursor } else { 0 };
        self
    }

    pub fn step(&self) -> CascadeStep {
        self.step
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn allows_random(&self) -> bool {
        self.allow_random
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Help panel for the highlighted entry
    pub fn help_lines(&self) -> Vec<String> {
        self.help
            .as_ref()
            .map(|help| help.lines(self.cursor))
            .unwrap_or_default()
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            step: self.step,
            items: self.labels.clone(),
            cursor: self.cursor,
        }
    }

    fn move_up(&mut self) {
        let n = self.labels.len();
        self.cursor = (self.cursor + n - 1) % n;
    }

    fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.labels.len();
    }

    /// Apply one key. `None` means the question is still open.
    fn handle_key(&mut self, key: BirthKey, rng: &mut dyn ChoiceRng) -> Option<MenuOutcome> {
        match key {
            BirthKey::Up | BirthKey::Char('8') => self.move_up(),
            BirthKey::Down | BirthKey::Char('2') => self.move_down(),
            BirthKey::Enter | BirthKey::Right | BirthKey::Char('6') => {
                return Some(MenuOutcome::Selected(self.cursor));
            }
            BirthKey::Escape | BirthKey::Left | BirthKey::Char('4') => {
                return Some(MenuOutcome::Back);
            }
            BirthKey::Quit => return Some(MenuOutcome::Quit),
            BirthKey::Char('=') => return Some(MenuOutcome::Options),
            BirthKey::Char('*') => {
                if !self.allow_random {
                    trace!(step = %self.step, "random pick not allowed here");
                    return None;
                }
                self.cursor = rng.pick(self.labels.len());
                return Some(MenuOutcome::Random(self.cursor));
            }
            BirthKey::Char(c) if c.is_ascii_lowercase() => {
                let idx = (c as u8 - b'a') as usize;
                if idx < self.labels.len() {
                    if idx == self.cursor {
                        return Some(MenuOutcome::Selected(idx));
                    }
                    self.cursor = idx;
                }
            }
            _ => {}
        }
        None
    }
}

/// Ask one menu question.
///
/// `answered` holds the menus of earlier questions, drawn to the left
/// and never focused.
pub fn select_one<U, R>(
    ui: &mut U,
    rng: &mut R,
    answered: &[MenuView],
    choices: &mut MenuChoiceSet<'_>,
) -> Result<MenuOutcome, BirthError>
where
    U: BirthUi + ?Sized,
    R: ChoiceRng,
{
    if choices.is_empty() {
        return Err(BirthError::EmptyCatalog(choices.step.catalog_name()));
    }

    loop {
        let mut menus = answered.to_vec();
        menus.push(choices.view());
        ui.draw(&BirthScreen::Menus(MenusView {
            menus,
            hint: choices.step.hint(),
            help: choices.help_lines(),
        }))?;

        let key = ui.next_key()?;
        if let Some(outcome) = choices.handle_key(key, rng) {
            debug!(step = %choices.step, ?outcome, "menu answered");
            return Ok(outcome);
        }
    }
}
