//! Standard roller: choose the order in which stats get the best dice
//!
//! The server rolls until the first three stats reach 17, 16 and 15.

use crate::player::{RollMethod, RollerResult, STAT_MAX, Stat, StatRoll};

use crate::birth::ui::{BirthKey, CharacterSummary, StandardView};

/// Minimum rolled value for the first three stats placed
pub const ORDER_THRESHOLDS: [u8; 3] = [17, 16, 15];

/// What a key did to the standard roller screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardStep {
    Continue,
    Complete,
    Back,
    Restart,
    Quit,
}

/// Stats placed so far, in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatOrder {
    placed: Vec<Stat>,
}

impl StatOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placed(&self) -> &[Stat] {
        &self.placed
    }

    /// Stats not yet placed, in index order
    pub fn available(&self) -> Vec<Stat> {
        Stat::ALL
            .into_iter()
            .filter(|s| !self.placed.contains(s))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.placed.len() == STAT_MAX
    }

    pub fn apply(&mut self, key: BirthKey) -> StandardStep {
        match key {
            BirthKey::Quit => StandardStep::Quit,
            BirthKey::Escape if self.placed.is_empty() => StandardStep::Back,
            BirthKey::Escape => StandardStep::Restart,
            BirthKey::Char(c) => {
                if let Some(stat) = Stat::from_letter(c).filter(|s| !self.placed.contains(s)) {
                    self.placed.push(stat);
                }
                if self.is_complete() {
                    StandardStep::Complete
                } else {
                    StandardStep::Continue
                }
            }
            _ => StandardStep::Continue,
        }
    }

    /// The finished order, once all six stats are placed
    pub fn result(&self) -> Option<RollerResult> {
        let order: [Stat; STAT_MAX] = self.placed.as_slice().try_into().ok()?;
        Some(RollerResult::new(StatRoll::Order(order), RollMethod::Standard))
    }

    pub fn view(&self, summary: &CharacterSummary) -> StandardView {
        StandardView {
            summary: summary.clone(),
            placed: self.placed.clone(),
            available: self.available(),
        }
    }
}
