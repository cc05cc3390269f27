//! Built-in player classes
//!
//! The last entry is the placeholder ghost class. The two entries before
//! it are closed to restricted races.

use mb_core::player::{ClassFlags, ClassId, ClassInfo, PlayerFlags, STAT_MAX, SkillSet};

use crate::races::skills;

/// Static class record
#[derive(Debug, Clone, Copy)]
pub struct ClassDef {
    pub name: &'static str,
    /// Str, Int, Wis, Dex, Con, Chr
    pub stat_adj: [i8; STAT_MAX],
    pub skills: SkillSet,
    pub hit_die: i16,
    pub exp_factor: i16,
    pub realm: Option<&'static str>,
    pub pflags: PlayerFlags,
    pub catalog_flags: ClassFlags,
}

impl ClassDef {
    pub fn to_info(&self, id: ClassId) -> ClassInfo {
        ClassInfo {
            id,
            name: self.name.to_string(),
            stat_adj: self.stat_adj,
            skills: self.skills,
            hit_die: self.hit_die,
            exp_factor: self.exp_factor,
            realm: self.realm.map(str::to_string),
            pflags: self.pflags,
            catalog_flags: self.catalog_flags,
        }
    }
}

const OPEN: ClassFlags = ClassFlags::empty();

/// All player classes
pub static CLASSES: &[ClassDef] = &[
    ClassDef {
        name: "Warrior",
        stat_adj: [3, -2, -2, 2, 2, -1],
        skills: skills(25, 18, 18, 1, 14, 2, 70, 55, 0),
        hit_die: 9,
        exp_factor: 0,
        realm: None,
        pflags: PlayerFlags::BRAVERY_30,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Mage",
        stat_adj: [-3, 3, 0, 1, -2, 1],
        skills: skills(30, 36, 30, 2, 16, 20, 34, 20, 0),
        hit_die: 0,
        exp_factor: 30,
        realm: Some("arcane"),
        pflags: PlayerFlags::ZERO_FAIL
            .union(PlayerFlags::BEAM)
            .union(PlayerFlags::CHOOSE_SPELLS),
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Druid",
        stat_adj: [-2, 0, 3, -2, 1, 1],
        skills: skills(30, 30, 30, 3, 16, 20, 34, 20, 0),
        hit_die: 0,
        exp_factor: 30,
        realm: Some("nature"),
        pflags: PlayerFlags::ZERO_FAIL.union(PlayerFlags::CHOOSE_SPELLS),
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Priest",
        stat_adj: [-1, -3, 3, -1, 0, 2],
        skills: skills(25, 30, 32, 2, 16, 8, 48, 35, 0),
        hit_die: 2,
        exp_factor: 20,
        realm: Some("divine"),
        pflags: PlayerFlags::BLESS_WEAPON.union(PlayerFlags::ZERO_FAIL),
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Necromancer",
        stat_adj: [-3, 3, 0, 1, -2, -2],
        skills: skills(30, 36, 30, 2, 16, 20, 34, 20, 0),
        hit_die: 0,
        exp_factor: 30,
        realm: Some("necromantic"),
        pflags: PlayerFlags::ZERO_FAIL
            .union(PlayerFlags::CHOOSE_SPELLS)
            .union(PlayerFlags::UNLIGHT),
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Paladin",
        stat_adj: [1, -3, 1, 0, 2, 2],
        skills: skills(20, 24, 25, 1, 12, 2, 68, 40, 0),
        hit_die: 6,
        exp_factor: 35,
        realm: Some("divine"),
        pflags: PlayerFlags::BLESS_WEAPON,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Blackguard",
        stat_adj: [2, 0, 0, -1, 2, -1],
        skills: skills(20, 24, 20, 0, 10, 5, 65, 30, 0),
        hit_die: 8,
        exp_factor: 35,
        realm: Some("necromantic"),
        pflags: PlayerFlags::COMBAT_REGEN,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Rogue",
        stat_adj: [0, 1, -3, 3, -1, -1],
        skills: skills(45, 32, 28, 5, 32, 24, 60, 66, 0),
        hit_die: 6,
        exp_factor: 25,
        realm: Some("arcane"),
        pflags: PlayerFlags::STEAL,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Ranger",
        stat_adj: [0, 2, -2, 3, 0, 1],
        skills: skills(30, 32, 28, 3, 24, 16, 56, 72, 0),
        hit_die: 4,
        exp_factor: 30,
        realm: Some("nature"),
        pflags: PlayerFlags::FAST_SHOT,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Sorceror",
        stat_adj: [-4, 4, 0, 1, -3, 0],
        skills: skills(25, 40, 30, 2, 14, 18, 25, 15, 0),
        hit_die: 0,
        exp_factor: 40,
        realm: Some("arcane"),
        pflags: PlayerFlags::ZERO_FAIL
            .union(PlayerFlags::BEAM)
            .union(PlayerFlags::CHOOSE_SPELLS),
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Unbeliever",
        stat_adj: [2, -2, -2, 2, 2, 0],
        skills: skills(25, 15, 40, 1, 14, 2, 68, 50, 0),
        hit_die: 10,
        exp_factor: 10,
        realm: None,
        pflags: PlayerFlags::NO_MANA,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Archer",
        stat_adj: [1, 0, 0, 3, 0, 0],
        skills: skills(25, 18, 18, 2, 20, 15, 40, 80, 0),
        hit_die: 6,
        exp_factor: 30,
        realm: None,
        pflags: PlayerFlags::FAST_SHOT,
        catalog_flags: OPEN,
    },
    ClassDef {
        name: "Monk",
        stat_adj: [2, -1, 1, 3, 1, 0],
        skills: skills(30, 30, 32, 3, 20, 15, 60, 20, 0),
        hit_die: 6,
        exp_factor: 30,
        realm: Some("divine"),
        pflags: PlayerFlags::UNARMED_COMBAT.union(PlayerFlags::MARTIAL_ARTS),
        catalog_flags: ClassFlags::NOT_FOR_RESTRICTED,
    },
    ClassDef {
        name: "Shapechanger",
        stat_adj: [0, 1, 1, 1, 0, 0],
        skills: skills(30, 30, 30, 2, 18, 15, 40, 30, 0),
        hit_die: 4,
        exp_factor: 35,
        realm: Some("nature"),
        pflags: PlayerFlags::SHAPECHANGE,
        catalog_flags: ClassFlags::NOT_FOR_RESTRICTED,
    },
    ClassDef {
        name: "Ghost",
        stat_adj: [0, 0, 0, 0, 0, 0],
        skills: skills(0, 0, 0, 0, 0, 0, 0, 0, 0),
        hit_die: 0,
        exp_factor: 0,
        realm: None,
        pflags: PlayerFlags::empty(),
        catalog_flags: ClassFlags::PLACEHOLDER,
    },
];

/// Number of classes, the placeholder included
pub fn num_classes() -> usize {
    CLASSES.len()
}

/// Get a class by index
pub fn get_class(index: usize) -> Option<&'static ClassDef> {
    CLASSES.get(index)
}
