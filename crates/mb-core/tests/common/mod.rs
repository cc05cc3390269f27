use mb_core::BirthCatalog;
use mb_core::ChoiceRng;
use mb_core::player::{
    ClassFlags, ClassId, ClassInfo, ObjectFlags, PlayerFlags, RaceId, RaceInfo, Resistances,
    SkillSet,
};

pub struct MiniCatalog {
    pub races: Vec<RaceInfo>,
    pub classes: Vec<ClassInfo>,
}

impl MiniCatalog {
    pub fn new() -> Self {
        let race = |id: u8, name: &str, pflags: PlayerFlags| RaceInfo {
            id: RaceId(id),
            name: name.to_string(),
            stat_adj: [1, 0, 0, 0, 1, 0],
            skills: SkillSet::default(),
            hit_die: 10,
            exp_factor: 100,
            infravision: 2,
            flags: ObjectFlags::empty(),
            resists: Resistances::empty(),
            pflags,
        };
        let class = |id: u8, name: &str, catalog_flags: ClassFlags| ClassInfo {
            id: ClassId(id),
            name: name.to_string(),
            stat_adj: [0, 2, 0, 0, 0, 0],
            skills: SkillSet::default(),
            hit_die: 5,
            exp_factor: 25,
            realm: Some("arcane".to_string()),
            pflags: PlayerFlags::empty(),
            catalog_flags,
        };

        Self {
            races: vec![
                race(0, "Human", PlayerFlags::empty()),
                race(1, "Hobbit", PlayerFlags::KNOW_MUSHROOM),
                race(2, "Dragon", PlayerFlags::DRAGON),
            ],
            classes: vec![
                class(0, "Warrior", ClassFlags::empty()),
                class(1, "Mage", ClassFlags::empty()),
                class(2, "Monk", ClassFlags::NOT_FOR_RESTRICTED),
                class(3, "Shapechanger", ClassFlags::NOT_FOR_RESTRICTED),
                class(4, "Ghost", ClassFlags::PLACEHOLDER),
            ],
        }
    }
}

impl BirthCatalog for MiniCatalog {
    fn races(&self) -> &[RaceInfo] {
        &self.races
    }

    fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }
}

/// Random pick that always lands on the last entry
pub struct LastRng;

impl ChoiceRng for LastRng {
    fn pick(&mut self, n: usize) -> usize {
        n.saturating_sub(1)
    }
}
