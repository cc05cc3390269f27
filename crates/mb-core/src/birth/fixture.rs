//! Small catalog and deterministic rng for unit tests

use crate::catalog::BirthCatalog;
use crate::player::{
    ClassFlags, ClassId, ClassInfo, ObjectFlags, PlayerFlags, RaceId, RaceInfo, Resistances,
    SkillSet,
};
use crate::rng::ChoiceRng;

pub struct TestCatalog {
    races: Vec<RaceInfo>,
    classes: Vec<ClassInfo>,
}

fn race(id: u8, name: &str, stat_adj: [i8; 6], pflags: PlayerFlags) -> RaceInfo {
    RaceInfo {
        id: RaceId(id),
        name: name.to_string(),
        stat_adj,
        skills: SkillSet::default(),
        hit_die: 10,
        exp_factor: 100,
        infravision: 0,
        flags: ObjectFlags::empty(),
        resists: Resistances::empty(),
        pflags,
    }
}

fn class(id: u8, name: &str, stat_adj: [i8; 6], catalog_flags: ClassFlags) -> ClassInfo {
    ClassInfo {
        id: ClassId(id),
        name: name.to_string(),
        stat_adj,
        skills: SkillSet::default(),
        hit_die: 9,
        exp_factor: 0,
        realm: None,
        pflags: PlayerFlags::empty(),
        catalog_flags,
    }
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            races: vec![
                race(0, "Human", [0; 6], PlayerFlags::empty()),
                race(1, "Dwarf", [2, -3, 2, -2, 2, -3], PlayerFlags::SEE_ORE),
                race(2, "Dragon", [2, 2, 2, 2, 2, 2], PlayerFlags::DRAGON),
            ],
            classes: vec![
                class(0, "Warrior", [3, -2, -2, 2, 2, 0], ClassFlags::empty()),
                class(1, "Mage", [-3, 3, 0, 1, -2, 1], ClassFlags::empty()),
                class(2, "Monk", [2, -1, 1, 3, 1, 0], ClassFlags::NOT_FOR_RESTRICTED),
                class(3, "Shapechanger", [0, 1, 0, 1, 0, 0], ClassFlags::NOT_FOR_RESTRICTED),
                class(4, "Ranger", [0, 1, 0, 3, 0, 1], ClassFlags::empty()),
                class(5, "Ghost", [0; 6], ClassFlags::PLACEHOLDER),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            races: Vec::new(),
            classes: Vec::new(),
        }
    }
}

impl BirthCatalog for TestCatalog {
    fn races(&self) -> &[RaceInfo] {
        &self.races
    }

    fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }
}

/// Always picks the same index (wrapped into range)
pub struct FixedRng(pub usize);

impl ChoiceRng for FixedRng {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 { 0 } else { self.0 % n }
    }
}
