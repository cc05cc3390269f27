//! Sex, race and class definitions

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::flags::{ClassFlags, ObjectFlags, PlayerFlags, Resistances};
use super::stat::{STAT_MAX, Stat};

/// Player sex
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Sex {
    #[default]
    Female,
    Male,
    Neuter,
}

impl Sex {
    /// Create from menu index
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Sex::Female),
            1 => Some(Sex::Male),
            2 => Some(Sex::Neuter),
            _ => None,
        }
    }

    /// Menu index
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Title shown in the sex menu and character summary
    pub const fn title(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
            Sex::Neuter => "Neuter",
        }
    }
}

/// Stable race identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceId(pub u8);

/// Stable class identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub u8);

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill adjustments shown in the race and class help panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub to_hit_melee: i16,
    pub to_hit_bow: i16,
    pub to_hit_throw: i16,
    pub disarm: i16,
    pub device: i16,
    pub save: i16,
    pub stealth: i16,
    pub digging: i16,
    pub search: i16,
    pub search_frequency: i16,
}

/// Sums saturate so extreme catalog values cannot overflow
impl Add for SkillSet {
    type Output = SkillSet;

    fn add(self, rhs: SkillSet) -> SkillSet {
        SkillSet {
            to_hit_melee: self.to_hit_melee.saturating_add(rhs.to_hit_melee),
            to_hit_bow: self.to_hit_bow.saturating_add(rhs.to_hit_bow),
            to_hit_throw: self.to_hit_throw.saturating_add(rhs.to_hit_throw),
            disarm: self.disarm.saturating_add(rhs.disarm),
            device: self.device.saturating_add(rhs.device),
            save: self.save.saturating_add(rhs.save),
            stealth: self.stealth.saturating_add(rhs.stealth),
            digging: self.digging.saturating_add(rhs.digging),
            search: self.search.saturating_add(rhs.search),
            search_frequency: self.search_frequency.saturating_add(rhs.search_frequency),
        }
    }
}

/// Player race record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceInfo {
    pub id: RaceId,
    pub name: String,
    /// Stat adjustments, indexed by [`Stat::index`]
    pub stat_adj: [i8; STAT_MAX],
    #[serde(default)]
    pub skills: SkillSet,
    pub hit_die: i16,
    /// Experience factor in percent
    pub exp_factor: i16,
    /// Infravision range in units of 10 ft
    #[serde(default)]
    pub infravision: i16,
    #[serde(default)]
    pub flags: ObjectFlags,
    #[serde(default)]
    pub resists: Resistances,
    #[serde(default)]
    pub pflags: PlayerFlags,
}

impl RaceInfo {
    /// Adjustment this race applies to one stat
    pub fn adj(&self, stat: Stat) -> i32 {
        self.stat_adj[stat.index()] as i32
    }

    /// Races with the restricted trait get a reduced class list
    pub fn is_restricted(&self) -> bool {
        self.pflags.contains(PlayerFlags::DRAGON)
    }
}

/// Player class record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: ClassId,
    pub name: String,
    /// Stat adjustments, indexed by [`Stat::index`]
    pub stat_adj: [i8; STAT_MAX],
    #[serde(default)]
    pub skills: SkillSet,
    pub hit_die: i16,
    /// Experience factor in percent
    pub exp_factor: i16,
    /// Adjective of the spell realm ("arcane", "divine"), if the class casts
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub pflags: PlayerFlags,
    #[serde(default)]
    pub catalog_flags: ClassFlags,
}

impl ClassInfo {
    /// Adjustment this class applies to one stat
    pub fn adj(&self, stat: Stat) -> i32 {
        self.stat_adj[stat.index()] as i32
    }

    /// Whether a character of the given race may pick this class
    pub fn selectable_by(&self, race: &RaceInfo) -> bool {
        if self.catalog_flags.contains(ClassFlags::PLACEHOLDER) {
            return false;
        }
        !(race.is_restricted() && self.catalog_flags.contains(ClassFlags::NOT_FOR_RESTRICTED))
    }
}
