//! Help panels shown beside the race and class menus
//!
//! Each panel has a fixed height so that moving the cursor never leaves
//! stale lines behind.

use crate::player::{ClassInfo, RaceInfo, STAT_MAX, SkillSet, Stat};

/// Descriptive text for the highlighted choice of a menu
pub trait BrowseHelp {
    /// Panel lines for the choice at `index`
    fn lines(&self, index: usize) -> Vec<String>;
}

/// Trait lines shown under a race
const RACE_FLAG_SPACE: usize = 3;

/// Trait lines shown under a class
const CLASS_FLAG_SPACE: usize = 5;

/// Rows of the two-column stat adjustment block
const STAT_ROWS: usize = STAT_MAX.div_ceil(2);

fn stat_label(stat: Stat) -> String {
    format!("{}: ", stat.short_name())
}

fn stat_lines(adj: impl Fn(Stat) -> i32) -> Vec<String> {
    (0..STAT_ROWS)
        .filter_map(|row| {
            let left = Stat::from_index(row)?;
            let line = match Stat::from_index(row + STAT_ROWS) {
                Some(right) => format!(
                    "{}{:+3}  {}{:+3}",
                    stat_label(left),
                    adj(left),
                    stat_label(right),
                    adj(right)
                ),
                None => format!("{}{:+3}", stat_label(left), adj(left)),
            };
            Some(line)
        })
        .collect()
}

fn skill_lines(skills: &SkillSet, hit_die: i16, exp: i16, infra: Option<i16>) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Hit/Shoot/Throw: {:+3}/{:+4}/{:+4}",
            skills.to_hit_melee, skills.to_hit_bow, skills.to_hit_throw
        ),
        format!("Hit die: {:2}       XP mod: {:3}%", hit_die, exp),
        format!("Disarm: {:+3}       Devices: {:+3}", skills.disarm, skills.device),
        format!("Save:   {:+3}       Stealth: {:+3}", skills.save, skills.stealth),
    ];
    if let Some(infra) = infra {
        lines.push(format!("Infravision:             {:2} ft", i32::from(infra) * 10));
    }
    lines.push(format!("Digging:                   {:+3}", skills.digging));
    lines.push(format!(
        "Search:                 {:+3}/{:2}",
        skills.search, skills.search_frequency
    ));
    if infra.is_none() {
        lines.push(String::new());
    }
    lines
}

fn trait_lines<'t>(traits: impl Iterator<Item = &'t str>, space: usize) -> Vec<String> {
    let mut lines: Vec<String> = traits.take(space).map(|t| format!("{:<30}", t)).collect();
    lines.resize(space, String::new());
    lines
}

/// Race panel: stat adjustments, skills, and up to three traits
pub struct RaceHelp<'a> {
    races: &'a [RaceInfo],
}

impl<'a> RaceHelp<'a> {
    pub fn new(races: &'a [RaceInfo]) -> Self {
        Self { races }
    }
}

impl BrowseHelp for RaceHelp<'_> {
    fn lines(&self, index: usize) -> Vec<String> {
        let Some(race) = self.races.get(index) else {
            return Vec::new();
        };

        let mut lines = stat_lines(|stat| race.adj(stat));
        lines.extend(skill_lines(
            &race.skills,
            race.hit_die,
            race.exp_factor,
            Some(race.infravision),
        ));

        let traits = race
            .flags
            .descriptions()
            .chain(race.resists.descriptions())
            .chain(race.pflags.descriptions());
        lines.extend(trait_lines(traits, RACE_FLAG_SPACE));
        lines
    }
}

/// Class panel: combined race and class adjustments, realm, and up to
/// five class abilities
pub struct ClassHelp<'a> {
    race: &'a RaceInfo,
    classes: Vec<&'a ClassInfo>,
}

impl<'a> ClassHelp<'a> {
    pub fn new(race: &'a RaceInfo, classes: Vec<&'a ClassInfo>) -> Self {
        Self { race, classes }
    }
}

impl BrowseHelp for ClassHelp<'_> {
    fn lines(&self, index: usize) -> Vec<String> {
        let Some(class) = self.classes.get(index) else {
            return Vec::new();
        };
        let race = self.race;

        let mut lines = stat_lines(|stat| race.adj(stat) + class.adj(stat));
        lines.extend(skill_lines(
            &(race.skills + class.skills),
            race.hit_die.saturating_add(class.hit_die),
            race.exp_factor.saturating_add(class.exp_factor),
            None,
        ));

        if let Some(realm) = &class.realm {
            lines.push(format!("Learns {:<23}", realm));
        }
        lines.extend(trait_lines(class.pflags.descriptions(), CLASS_FLAG_SPACE));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{
        ClassFlags, ClassId, ObjectFlags, PlayerFlags, RaceId, Resistances,
    };

    fn dwarf() -> RaceInfo {
        RaceInfo {
            id: RaceId(5),
            name: "Dwarf".to_string(),
            stat_adj: [2, -3, 2, -2, 2, -3],
            skills: SkillSet {
                to_hit_melee: 15,
                to_hit_bow: 0,
                to_hit_throw: 0,
                disarm: 2,
                device: 9,
                save: 10,
                stealth: -1,
                digging: 40,
                search: 7,
                search_frequency: 10,
            },
            hit_die: 11,
            exp_factor: 120,
            infravision: 5,
            flags: ObjectFlags::PROT_BLIND,
            resists: Resistances::empty(),
            pflags: PlayerFlags::SEE_ORE,
        }
    }

    fn priest() -> ClassInfo {
        ClassInfo {
            id: ClassId(3),
            name: "Priest".to_string(),
            stat_adj: [-1, -3, 3, -1, 0, 2],
            skills: SkillSet {
                to_hit_melee: 25,
                save: 30,
                ..SkillSet::default()
            },
            hit_die: 2,
            exp_factor: 30,
            realm: Some("divine".to_string()),
            pflags: PlayerFlags::BLESS_WEAPON | PlayerFlags::ZERO_FAIL,
            catalog_flags: ClassFlags::empty(),
        }
    }

    #[test]
    fn test_race_panel_layout() {
        let races = [dwarf()];
        let lines = RaceHelp::new(&races).lines(0);

        assert_eq!(lines[0], "Str:  +2  Dex:  -2");
        assert_eq!(lines[1], "Int:  -3  Con:  +2");
        assert_eq!(lines[2], "Wis:  +2  Chr:  -3");
        assert_eq!(lines[3], "Hit/Shoot/Throw: +15/  +0/  +0");
        assert_eq!(lines[4], "Hit die: 11       XP mod: 120%");
        assert_eq!(lines[7], "Infravision:             50 ft");
        assert_eq!(lines[9], "Search:                  +7/10");
        assert_eq!(lines[10].trim_end(), "Resists blindness");
        assert_eq!(lines[11].trim_end(), "Senses ore and minerals");
        assert_eq!(lines[12], "");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_class_panel_combines_race() {
        let race = dwarf();
        let class = priest();
        let lines = ClassHelp::new(&race, vec![&class]).lines(0);

        assert_eq!(lines[0], "Str:  +1  Dex:  -3");
        assert_eq!(lines[2], "Wis:  +5  Chr:  -1");
        assert_eq!(lines[3], "Hit/Shoot/Throw: +40/  +0/  +0");
        assert_eq!(lines[4], "Hit die: 13       XP mod: 150%");
        // No infravision row; a blank keeps the height
        assert_eq!(lines[7], "Digging:                   +40");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10].trim_end(), "Learns divine");
        assert_eq!(lines[11].trim_end(), "Gets bonuses with blunt weapons");
        assert_eq!(lines[12].trim_end(), "Advanced spellcasting");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_panel_height_is_stable() {
        let plain = RaceInfo {
            flags: ObjectFlags::empty(),
            pflags: PlayerFlags::empty(),
            ..dwarf()
        };
        let races = [dwarf(), plain];
        let help = RaceHelp::new(&races);
        assert_eq!(help.lines(0).len(), help.lines(1).len());
        assert!(help.lines(2).is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let mut race = dwarf();
        race.infravision = 4000;
        race.hit_die = i16::MAX;
        race.skills.save = 30000;
        let mut class = priest();
        class.hit_die = i16::MAX;
        class.exp_factor = i16::MAX;
        class.skills.save = 30000;

        let races = [race.clone()];
        let lines = RaceHelp::new(&races).lines(0);
        assert_eq!(lines[7], "Infravision:             40000 ft");

        let lines = ClassHelp::new(&race, vec![&class]).lines(0);
        assert_eq!(lines[4], "Hit die: 32767       XP mod: 32767%");
        assert!(lines[6].starts_with("Save:   +32767"));
    }

    #[test]
    fn test_race_traits_capped_at_three() {
        let busy = RaceInfo {
            flags: ObjectFlags::SUST_STR | ObjectFlags::FREE_ACT | ObjectFlags::REGEN,
            resists: Resistances::POIS,
            ..dwarf()
        };
        let races = [busy];
        let lines = RaceHelp::new(&races).lines(0);
        let traits: Vec<_> = lines[10..].iter().map(|l| l.trim_end()).collect();
        assert_eq!(
            traits,
            vec!["Sustains strength", "Resists paralysis", "Regenerates quickly"]
        );
    }
}
