//! Point-based stat buying
//!
//! Every stat starts at the minimum; raising one spends points from a
//! fixed pool. A raise that would overspend is undone on the spot, so
//! the displayed total never exceeds the pool.

use tracing::trace;

use crate::player::{
    MAX_BIRTH_POINTS, MAX_BIRTH_STAT, MIN_BIRTH_STAT, RollMethod, RollerResult, STAT_MAX, Stat,
    StatRoll, modify_stat_value, stat_cost, total_cost,
};

use crate::birth::ui::{BirthKey, CharacterSummary, PointBasedView, PointRow};

/// What a key did to the point-based screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointStep {
    Continue,
    Commit,
    Back,
    Restart,
    Quit,
}

/// State of the point-based screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointBuy {
    values: [u8; STAT_MAX],
    cursor: usize,
    first_time: bool,
}

impl Default for PointBuy {
    fn default() -> Self {
        Self::new()
    }
}

impl PointBuy {
    pub fn new() -> Self {
        Self {
            values: [MIN_BIRTH_STAT; STAT_MAX],
            cursor: 0,
            first_time: true,
        }
    }

    pub fn values(&self) -> &[u8; STAT_MAX] {
        &self.values
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_cost(&self) -> u32 {
        total_cost(&self.values)
    }

    /// True until the first key other than Escape or Quit
    pub fn is_first_time(&self) -> bool {
        self.first_time
    }

    pub fn apply(&mut self, key: BirthKey) -> PointStep {
        match key {
            BirthKey::Quit => return PointStep::Quit,
            BirthKey::Escape if self.first_time => return PointStep::Back,
            BirthKey::Escape => return PointStep::Restart,
            _ => self.first_time = false,
        }

        match key {
            BirthKey::Enter => return PointStep::Commit,
            BirthKey::Up | BirthKey::Char('8') => {
                self.cursor = (self.cursor + STAT_MAX - 1) % STAT_MAX;
            }
            BirthKey::Down | BirthKey::Char('2') => {
                self.cursor = (self.cursor + 1) % STAT_MAX;
            }
            BirthKey::Left | BirthKey::Char('4') => self.lower(),
            BirthKey::Right | BirthKey::Char('6') => self.raise(),
            _ => {}
        }
        PointStep::Continue
    }

    fn lower(&mut self) {
        let value = &mut self.values[self.cursor];
        if *value > MIN_BIRTH_STAT {
            *value -= 1;
        }
    }

    fn raise(&mut self) {
        let value = &mut self.values[self.cursor];
        if *value < MAX_BIRTH_STAT {
            *value += 1;
        }

        // Undo on the stat under the cursor until the pool holds
        while self.total_cost() > MAX_BIRTH_POINTS && self.values[self.cursor] > MIN_BIRTH_STAT {
            self.values[self.cursor] -= 1;
            trace!(
                stat = %Stat::ALL[self.cursor],
                value = self.values[self.cursor],
                "point pool exceeded, raise undone"
            );
        }
    }

    pub fn result(&self) -> RollerResult {
        RollerResult::new(StatRoll::Points(self.values), RollMethod::PointBased)
    }

    /// Screen snapshot. `adjustments` is the combined race and class
    /// modifier per stat.
    pub fn view(&self, summary: &CharacterSummary, adjustments: &[i32; STAT_MAX]) -> PointBasedView {
        let rows = Stat::ALL
            .iter()
            .map(|&stat| {
                let value = self.values[stat.index()];
                PointRow {
                    stat,
                    value,
                    best: modify_stat_value(value as i32, adjustments[stat.index()]),
                    cost: stat_cost(value),
                }
            })
            .collect();

        PointBasedView {
            summary: summary.clone(),
            rows,
            total_cost: self.total_cost(),
            cursor: self.cursor,
        }
    }
}
