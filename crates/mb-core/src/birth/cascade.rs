//! The sex, race, class and roller menus
//!
//! Each cascade stage shows every menu answered so far plus its own
//! question. The menus are rebuilt from the draft on every entry and
//! dropped when the stage is left.

use strum::Display;
use tracing::info;

use crate::catalog::BirthCatalog;
use crate::error::BirthError;
use crate::player::{CharacterDraft, ClassInfo, RaceInfo, Roller};
use crate::rng::ChoiceRng;

use super::help::{ClassHelp, RaceHelp};
use super::menu::{MenuChoiceSet, MenuOutcome, select_one};
use super::stage::Stage;
use super::ui::{BirthUi, MenuView};

/// One question of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CascadeStep {
    Sex,
    Race,
    Class,
    Roller,
}

impl CascadeStep {
    pub const ALL: [CascadeStep; 4] = [
        CascadeStep::Sex,
        CascadeStep::Race,
        CascadeStep::Class,
        CascadeStep::Roller,
    ];

    /// Stage whose question this step asks
    pub const fn stage(self) -> Stage {
        match self {
            CascadeStep::Sex => Stage::SexChoice,
            CascadeStep::Race => Stage::RaceChoice,
            CascadeStep::Class => Stage::ClassChoice,
            CascadeStep::Roller => Stage::RollerChoice,
        }
    }

    /// Question hint shown above the menus
    pub const fn hint(self) -> &'static str {
        match self {
            CascadeStep::Sex => "Sex does not have any significant gameplay effects.",
            CascadeStep::Race => {
                "Race affects stats and skills, and may confer resistances and abilities."
            }
            CascadeStep::Class => "Class affects stats, skills, and other character traits.",
            CascadeStep::Roller => {
                "Choose how to generate your intrinsic stats. Point-based is recommended."
            }
        }
    }

    pub const fn allows_random(self) -> bool {
        !matches!(self, CascadeStep::Roller)
    }

    /// Catalog named in errors about this step
    pub const fn catalog_name(self) -> &'static str {
        match self {
            CascadeStep::Sex => "sex",
            CascadeStep::Race => "race",
            CascadeStep::Class => "class",
            CascadeStep::Roller => "roller",
        }
    }

    /// Build the choice set for this step, cursor on the draft's value
    fn choices<'c, C>(
        self,
        catalog: &'c C,
        draft: &CharacterDraft,
    ) -> Result<MenuChoiceSet<'c>, BirthError>
    where
        C: BirthCatalog + ?Sized,
    {
        let set = match self {
            CascadeStep::Sex => {
                let sexes = catalog.sexes();
                let cursor = draft
                    .sex
                    .and_then(|sex| sexes.iter().position(|s| *s == sex));
                MenuChoiceSet::new(self, sexes.iter().map(|s| s.title().to_string()).collect())
                    .with_cursor(cursor.unwrap_or(0))
            }
            CascadeStep::Race => {
                let races = catalog.races();
                let cursor = draft
                    .race
                    .and_then(|id| races.iter().position(|r| r.id == id));
                MenuChoiceSet::new(self, races.iter().map(|r| r.name.clone()).collect())
                    .with_help(RaceHelp::new(races))
                    .with_cursor(cursor.unwrap_or(0))
            }
            CascadeStep::Class => {
                let race = chosen_race(catalog, draft)?;
                let classes = catalog.selectable_classes(race);
                let cursor = draft
                    .class
                    .and_then(|id| classes.iter().position(|c| c.id == id));
                let labels = classes.iter().map(|c| c.name.clone()).collect();
                MenuChoiceSet::new(self, labels)
                    .with_help(ClassHelp::new(race, classes))
                    .with_cursor(cursor.unwrap_or(0))
            }
            CascadeStep::Roller => {
                let labels = [Roller::PointBased, Roller::Standard]
                    .iter()
                    .map(|r| r.to_string())
                    .collect();
                MenuChoiceSet::new(self, labels)
                    .with_cursor(draft.roller.map(|r| r.index()).unwrap_or(0))
            }
        };
        Ok(set)
    }

    /// Write the entry at `index` into the draft field for this step
    fn commit<C>(
        self,
        index: usize,
        catalog: &C,
        draft: &mut CharacterDraft,
    ) -> Result<(), BirthError>
    where
        C: BirthCatalog + ?Sized,
    {
        let missing = || BirthError::EmptyCatalog(self.catalog_name());
        match self {
            CascadeStep::Sex => {
                let sex = *catalog.sexes().get(index).ok_or_else(missing)?;
                info!(%sex, "sex chosen");
                draft.sex = Some(sex);
            }
            CascadeStep::Race => {
                let race = catalog.races().get(index).ok_or_else(missing)?;
                info!(race = %race.name, "race chosen");
                draft.race = Some(race.id);
            }
            CascadeStep::Class => {
                let race = chosen_race(catalog, draft)?;
                let classes: Vec<&ClassInfo> = catalog.selectable_classes(race);
                let class = classes.get(index).ok_or_else(missing)?;
                info!(class = %class.name, "class chosen");
                draft.class = Some(class.id);
            }
            CascadeStep::Roller => {
                let roller = Roller::from_index(index).ok_or_else(missing)?;
                info!(%roller, "roller chosen");
                draft.roller = Some(roller);
            }
        }
        Ok(())
    }
}

fn chosen_race<'c, C>(catalog: &'c C, draft: &CharacterDraft) -> Result<&'c RaceInfo, BirthError>
where
    C: BirthCatalog + ?Sized,
{
    let id = draft.race.ok_or(BirthError::MissingChoice("race"))?;
    catalog.race(id).ok_or(BirthError::UnknownRace(id))
}

/// Menus shown while `stage` is current, in screen order.
///
/// The last entry is the question being asked. Non-menu stages show none.
pub fn active_steps(stage: Stage) -> &'static [CascadeStep] {
    const ALL: &[CascadeStep] = &CascadeStep::ALL;
    match stage {
        Stage::SexChoice => &ALL[..1],
        Stage::RaceChoice => &ALL[..2],
        Stage::ClassChoice => &ALL[..3],
        Stage::RollerChoice => ALL,
        _ => &[],
    }
}

/// Run the menu question of a cascade stage.
///
/// Returns the next stage on a commit, the previous one on Back (which
/// for the sex menu is [`Stage::Back`]), the same stage after the birth
/// options, or [`Stage::Quit`].
pub fn run_cascade<C, U, R>(
    stage: Stage,
    draft: &mut CharacterDraft,
    catalog: &C,
    ui: &mut U,
    rng: &mut R,
) -> Result<Stage, BirthError>
where
    C: BirthCatalog + ?Sized,
    U: BirthUi + ?Sized,
    R: ChoiceRng,
{
    let Some((current, answered)) = active_steps(stage).split_last() else {
        return Err(BirthError::NotAMenuStage(stage));
    };

    let backdrop = answered
        .iter()
        .map(|step| step.choices(catalog, draft).map(|set| set.view()))
        .collect::<Result<Vec<MenuView>, _>>()?;
    let mut choices = current.choices(catalog, draft)?;

    let outcome = select_one(ui, rng, &backdrop, &mut choices)?;
    drop(choices);

    let next = match outcome {
        MenuOutcome::Selected(index) | MenuOutcome::Random(index) => {
            current.commit(index, catalog, draft)?;
            stage.next()
        }
        MenuOutcome::Back => stage.prev(),
        MenuOutcome::Options => {
            ui.birth_options()?;
            stage
        }
        MenuOutcome::Quit => Stage::Quit,
    };
    Ok(next)
}
