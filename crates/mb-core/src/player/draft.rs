//! The character draft assembled by the birth screens

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::role::{ClassId, RaceId, Sex};
use super::stat::{STAT_MAX, Stat};

/// Stat generation method offered by the roller menu
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Roller {
    #[default]
    #[strum(serialize = "Point-based")]
    PointBased,
    #[strum(serialize = "Standard roller")]
    Standard,
}

impl Roller {
    /// Create from menu index
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Roller::PointBased),
            1 => Some(Roller::Standard),
            _ => None,
        }
    }

    /// Menu index
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Tag recording how the stats of a finished draft were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[repr(u8)]
pub enum RollMethod {
    PointBased = 0,
    Standard = 1,
    /// Reroll of a previous character
    Quick = 2,
    /// New incarnation of a previous character
    QuickDynamic = 3,
}

impl From<Roller> for RollMethod {
    fn from(roller: Roller) -> Self {
        match roller {
            Roller::PointBased => RollMethod::PointBased,
            Roller::Standard => RollMethod::Standard,
        }
    }
}

/// Raw output of a stat roller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatRoll {
    /// Chosen stat values, indexed by [`Stat::index`]
    Points([u8; STAT_MAX]),
    /// Stat priority order for the server-side dice roller
    Order([Stat; STAT_MAX]),
}

/// Stats produced by a roller, with the method tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollerResult {
    pub roll: StatRoll,
    pub method: RollMethod,
}

impl RollerResult {
    pub fn new(roll: StatRoll, method: RollMethod) -> Self {
        Self { roll, method }
    }

    /// Flatten to the array submitted with the birth request: six entries
    /// (values or stat indices) followed by the method tag.
    pub fn to_packet(&self) -> [i16; STAT_MAX + 1] {
        let mut packet = [0i16; STAT_MAX + 1];
        match &self.roll {
            StatRoll::Points(values) => {
                for (slot, value) in packet.iter_mut().zip(values) {
                    *slot = *value as i16;
                }
            }
            StatRoll::Order(order) => {
                for (slot, stat) in packet.iter_mut().zip(order) {
                    *slot = stat.index() as i16;
                }
            }
        }
        packet[STAT_MAX] = self.method as i16;
        packet
    }
}

/// Character being assembled by the birth flow.
///
/// Fields are filled in stage order; a field is `None` until its stage
/// commits a choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    /// Character name, chosen before birth starts
    pub name: String,
    pub sex: Option<Sex>,
    pub race: Option<RaceId>,
    pub class: Option<ClassId>,
    pub roller: Option<Roller>,
    pub stats: Option<RollerResult>,
}

impl CharacterDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Clear every birth choice. The name is kept.
    pub fn reset(&mut self) {
        self.sex = None;
        self.race = None;
        self.class = None;
        self.roller = None;
        self.stats = None;
    }

    /// True once every birth field has been committed
    pub fn is_complete(&self) -> bool {
        self.sex.is_some()
            && self.race.is_some()
            && self.class.is_some()
            && self.stats.is_some()
    }
}

/// How a previous character is brought back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickKind {
    /// Reroll the same character
    Reroll,
    /// Play a new incarnation of a dead character
    NewIncarnation,
}

impl QuickKind {
    pub const fn method(&self) -> RollMethod {
        match self {
            QuickKind::Reroll => RollMethod::Quick,
            QuickKind::NewIncarnation => RollMethod::QuickDynamic,
        }
    }
}

/// Record of a previous character, offered for quick start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorCharacter {
    pub sex: Sex,
    pub race: RaceId,
    pub class: ClassId,
    pub stats: [u8; STAT_MAX],
    pub kind: QuickKind,
}
