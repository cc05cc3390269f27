//! Built-in player races
//!
//! Table order is menu order; a race's id is its index.

use mb_core::player::{
    ObjectFlags, PlayerFlags, RaceId, RaceInfo, Resistances, STAT_MAX, SkillSet,
};

/// Static race record
#[derive(Debug, Clone, Copy)]
pub struct RaceDef {
    pub name: &'static str,
    /// Str, Int, Wis, Dex, Con, Chr
    pub stat_adj: [i8; STAT_MAX],
    pub skills: SkillSet,
    pub hit_die: i16,
    pub exp_factor: i16,
    /// In units of 10 ft
    pub infravision: i16,
    pub flags: ObjectFlags,
    pub resists: Resistances,
    pub pflags: PlayerFlags,
}

impl RaceDef {
    pub fn to_info(&self, id: RaceId) -> RaceInfo {
        RaceInfo {
            id,
            name: self.name.to_string(),
            stat_adj: self.stat_adj,
            skills: self.skills,
            hit_die: self.hit_die,
            exp_factor: self.exp_factor,
            infravision: self.infravision,
            flags: self.flags,
            resists: self.resists,
            pflags: self.pflags,
        }
    }
}

/// Skill block in table column order:
/// disarm, device, save, stealth, search, search frequency, melee, bows,
/// digging. Throwing uses the bow skill.
#[allow(clippy::too_many_arguments)]
pub(crate) const fn skills(
    disarm: i16,
    device: i16,
    save: i16,
    stealth: i16,
    search: i16,
    search_frequency: i16,
    melee: i16,
    bows: i16,
    digging: i16,
) -> SkillSet {
    SkillSet {
        to_hit_melee: melee,
        to_hit_bow: bows,
        to_hit_throw: bows,
        disarm,
        device,
        save,
        stealth,
        digging,
        search,
        search_frequency,
    }
}

const NONE: ObjectFlags = ObjectFlags::empty();
const NO_RES: Resistances = Resistances::empty();
const NO_PF: PlayerFlags = PlayerFlags::empty();

/// All player races
pub static RACES: &[RaceDef] = &[
    RaceDef {
        name: "Human",
        stat_adj: [0, 0, 0, 0, 0, 0],
        skills: skills(0, 0, 0, 0, 0, 10, 0, 0, 0),
        hit_die: 10,
        exp_factor: 100,
        infravision: 0,
        flags: NONE,
        resists: NO_RES,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Half-Elf",
        stat_adj: [-1, 1, 0, 1, -1, 1],
        skills: skills(2, 3, 3, 1, 6, 11, -1, 5, 0),
        hit_die: 10,
        exp_factor: 110,
        infravision: 2,
        flags: ObjectFlags::SUST_DEX,
        resists: NO_RES,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Elf",
        stat_adj: [-1, 2, 2, 1, -2, 2],
        skills: skills(5, 6, 6, 1, 8, 12, -5, 15, 0),
        hit_die: 9,
        exp_factor: 120,
        infravision: 3,
        flags: ObjectFlags::SUST_DEX,
        resists: Resistances::LIGHT,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Hobbit",
        stat_adj: [-2, 2, 1, 3, 2, 1],
        skills: skills(15, 18, 18, 4, 12, 15, -10, 20, 0),
        hit_die: 7,
        exp_factor: 110,
        infravision: 4,
        flags: ObjectFlags::HOLD_LIFE,
        resists: NO_RES,
        pflags: PlayerFlags::KNOW_MUSHROOM,
    },
    RaceDef {
        name: "Gnome",
        stat_adj: [-1, 2, 0, 2, 1, -2],
        skills: skills(10, 12, 12, 3, 6, 13, -8, 12, 0),
        hit_die: 8,
        exp_factor: 125,
        infravision: 4,
        flags: ObjectFlags::FREE_ACT,
        resists: NO_RES,
        pflags: PlayerFlags::KNOW_ZAPPER,
    },
    RaceDef {
        name: "Dwarf",
        stat_adj: [2, -3, 2, -2, 2, -3],
        skills: skills(2, 9, 9, -1, 7, 10, 15, 0, 40),
        hit_die: 11,
        exp_factor: 120,
        infravision: 5,
        flags: ObjectFlags::PROT_BLIND,
        resists: NO_RES,
        pflags: PlayerFlags::SEE_ORE,
    },
    RaceDef {
        name: "Half-Orc",
        stat_adj: [2, -1, 0, 0, 1, -4],
        skills: skills(-3, -3, -3, -1, 0, 7, 12, -5, 0),
        hit_die: 10,
        exp_factor: 110,
        infravision: 3,
        flags: NONE,
        resists: Resistances::DARK,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Half-Troll",
        stat_adj: [4, -4, -2, -4, 3, -6],
        skills: skills(-5, -8, -8, -2, -1, 5, 20, -10, 0),
        hit_die: 12,
        exp_factor: 120,
        infravision: 3,
        flags: ObjectFlags::SUST_STR.union(ObjectFlags::REGEN),
        resists: NO_RES,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Dunadan",
        stat_adj: [1, 2, 2, 2, 3, 2],
        skills: skills(4, 5, 5, 2, 3, 13, 15, 10, 0),
        hit_die: 10,
        exp_factor: 180,
        infravision: 0,
        flags: ObjectFlags::SUST_CON,
        resists: NO_RES,
        pflags: NO_PF,
    },
    RaceDef {
        name: "High-Elf",
        stat_adj: [1, 3, 2, 3, 1, 5],
        skills: skills(4, 20, 20, 3, 3, 14, 10, 25, 0),
        hit_die: 10,
        exp_factor: 200,
        infravision: 4,
        flags: ObjectFlags::SEE_INVIS,
        resists: Resistances::LIGHT,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Kobold",
        stat_adj: [-1, -1, 0, 2, 2, -2],
        skills: skills(10, 5, 0, 4, 8, 15, -5, 10, 0),
        hit_die: 8,
        exp_factor: 115,
        infravision: 5,
        flags: NONE,
        resists: Resistances::POIS,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Ent",
        stat_adj: [4, -2, 2, -4, 4, 0],
        skills: skills(-5, 0, 5, -4, 5, 10, 15, -10, 10),
        hit_die: 14,
        exp_factor: 225,
        infravision: 0,
        flags: ObjectFlags::SLOW_DIGEST.union(ObjectFlags::SEE_INVIS),
        resists: NO_RES,
        pflags: NO_PF,
    },
    RaceDef {
        name: "Thunderlord",
        stat_adj: [3, 0, 1, 1, 2, 1],
        skills: skills(0, 5, 5, -2, 8, 12, 15, 5, 0),
        hit_die: 12,
        exp_factor: 200,
        infravision: 0,
        flags: ObjectFlags::FEATHER,
        resists: NO_RES,
        pflags: PlayerFlags::THUNDERLORD,
    },
    RaceDef {
        name: "Dragon",
        stat_adj: [2, 1, 1, -2, 2, -1],
        skills: skills(-2, 5, 5, -3, 5, 10, 10, -20, 0),
        hit_die: 12,
        exp_factor: 250,
        infravision: 5,
        flags: NONE,
        resists: NO_RES,
        pflags: PlayerFlags::DRAGON,
    },
];

/// Number of races
pub fn num_races() -> usize {
    RACES.len()
}

/// Get a race by index
pub fn get_race(index: usize) -> Option<&'static RaceDef> {
    RACES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(get_race(0).map(|r| r.name), Some("Human"));
        assert_eq!(get_race(5).map(|r| r.hit_die), Some(11));
        assert!(get_race(num_races()).is_none());
    }

    #[test]
    fn test_exactly_one_restricted_race() {
        let restricted: Vec<_> = RACES
            .iter()
            .filter(|r| r.pflags.contains(PlayerFlags::DRAGON))
            .map(|r| r.name)
            .collect();
        assert_eq!(restricted, vec!["Dragon"]);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in RACES.iter().enumerate() {
            for b in &RACES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
