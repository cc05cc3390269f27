//! Player birth data
//!
//! Stats, sex, race and class records, and the character draft that the
//! birth screens fill in.

mod draft;
mod flags;
mod role;
mod stat;

pub use draft::{CharacterDraft, PriorCharacter, QuickKind, RollMethod, Roller, RollerResult, StatRoll};
pub use flags::{ClassFlags, ObjectFlags, PlayerFlags, Resistances};
pub use role::{ClassId, ClassInfo, RaceId, RaceInfo, Sex, SkillSet};
pub use stat::{BIRTH_STAT_COSTS, MAX_BIRTH_POINTS, MAX_BIRTH_STAT, MIN_BIRTH_STAT, STAT_MAX};
pub use stat::{Stat, format_stat, modify_stat_value, stat_cost, total_cost};
