//! Intrinsic stats and the point-based cost table

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Number of intrinsic stats
pub const STAT_MAX: usize = 6;

/// Lowest value a stat can take at birth
pub const MIN_BIRTH_STAT: u8 = 10;

/// Highest value a stat can take at birth
pub const MAX_BIRTH_STAT: u8 = 18;

/// Pool of points available to the point-based roller
pub const MAX_BIRTH_POINTS: u32 = 20;

/// Point cost of each birth stat value, indexed by `value - MIN_BIRTH_STAT`
pub const BIRTH_STAT_COSTS: [u32; 9] = [0, 1, 2, 3, 4, 5, 6, 8, 12];

/// Intrinsic stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Stat {
    #[strum(serialize = "Str")]
    Strength = 0,
    #[strum(serialize = "Int")]
    Intelligence = 1,
    #[strum(serialize = "Wis")]
    Wisdom = 2,
    #[strum(serialize = "Dex")]
    Dexterity = 3,
    #[strum(serialize = "Con")]
    Constitution = 4,
    #[strum(serialize = "Chr")]
    Charisma = 5,
}

impl Stat {
    /// All stats in index order
    pub const ALL: [Stat; STAT_MAX] = [
        Stat::Strength,
        Stat::Intelligence,
        Stat::Wisdom,
        Stat::Dexterity,
        Stat::Constitution,
        Stat::Charisma,
    ];

    /// Create from index (0-5)
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Stat::Strength),
            1 => Some(Stat::Intelligence),
            2 => Some(Stat::Wisdom),
            3 => Some(Stat::Dexterity),
            4 => Some(Stat::Constitution),
            5 => Some(Stat::Charisma),
            _ => None,
        }
    }

    /// Get index (0-5)
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Three-letter name used in the stat tables
    pub const fn short_name(&self) -> &'static str {
        match self {
            Stat::Strength => "Str",
            Stat::Intelligence => "Int",
            Stat::Wisdom => "Wis",
            Stat::Dexterity => "Dex",
            Stat::Constitution => "Con",
            Stat::Charisma => "Chr",
        }
    }

    /// Selection letter ('a' for Str through 'f' for Chr)
    pub const fn letter(&self) -> char {
        (b'a' + *self as u8) as char
    }

    /// Stat keyed by a lowercase selection letter
    pub fn from_letter(c: char) -> Option<Self> {
        if !c.is_ascii_lowercase() {
            return None;
        }
        Self::from_index((c as u8 - b'a') as usize)
    }
}

/// Point cost of a single birth stat value.
///
/// Values outside 10..=18 are clamped into the table.
pub fn stat_cost(value: u8) -> u32 {
    let value = value.clamp(MIN_BIRTH_STAT, MAX_BIRTH_STAT);
    BIRTH_STAT_COSTS[(value - MIN_BIRTH_STAT) as usize]
}

/// Total point cost of a full set of birth stats
pub fn total_cost(values: &[u8; STAT_MAX]) -> u32 {
    values.iter().map(|&v| stat_cost(v)).sum()
}

/// Apply a race/class adjustment to a stat value.
///
/// Above 18 each point is worth ten (18/10, 18/20, ...), matching the
/// server's stat arithmetic.
pub fn modify_stat_value(value: i32, amount: i32) -> i32 {
    let mut value = value;
    if amount > 0 {
        for _ in 0..amount {
            if value < 18 {
                value += 1;
            } else {
                value += 10;
            }
        }
    } else if amount < 0 {
        for _ in 0..-amount {
            if value >= 18 + 10 {
                value -= 10;
            } else if value > 18 {
                value = 18;
            } else if value > 3 {
                value -= 1;
            }
        }
    }
    value
}

/// Format a stat value for display, six columns wide.
///
/// Values above 18 use the 18/xx notation.
pub fn format_stat(value: i32) -> String {
    if value > 18 {
        let bonus = value - 18;
        if bonus >= 220 {
            "18/***".to_string()
        } else if bonus >= 100 {
            format!("18/{:03}", bonus)
        } else {
            format!(" 18/{:02}", bonus)
        }
    } else {
        format!("    {:2}", value)
    }
}
