//! Stat rollers
//!
//! Both rollers keep their state in a plain struct driven one key at a
//! time, so the screen loop here stays thin.

mod point_based;
mod standard;

pub use point_based::{PointBuy, PointStep};
pub use standard::{ORDER_THRESHOLDS, StandardStep, StatOrder};

use tracing::info;

use crate::catalog::BirthCatalog;
use crate::error::BirthError;
use crate::player::{CharacterDraft, ClassInfo, RaceInfo, Roller, RollerResult, STAT_MAX, Stat};

use super::ui::{BirthScreen, BirthUi, CharacterSummary};

/// Result of one visit to the roller stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollerOutcome {
    Confirmed(RollerResult),
    Back,
    /// Start the same roller over
    Restart,
    Quit,
}

/// Race and class chosen in the draft
pub(crate) fn chosen_role<'c, C>(
    catalog: &'c C,
    draft: &CharacterDraft,
) -> Result<(&'c RaceInfo, &'c ClassInfo), BirthError>
where
    C: BirthCatalog + ?Sized,
{
    let race_id = draft.race.ok_or(BirthError::MissingChoice("race"))?;
    let class_id = draft.class.ok_or(BirthError::MissingChoice("class"))?;
    let race = catalog.race(race_id).ok_or(BirthError::UnknownRace(race_id))?;
    let class = catalog
        .class(class_id)
        .ok_or(BirthError::UnknownClass(class_id))?;
    Ok((race, class))
}

pub(crate) fn summary(draft: &CharacterDraft, race: &RaceInfo, class: &ClassInfo) -> CharacterSummary {
    CharacterSummary {
        name: draft.name.clone(),
        sex: draft.sex.map(|s| s.title().to_string()).unwrap_or_default(),
        race: race.name.clone(),
        class: class.name.clone(),
    }
}

/// Combined race and class modifier per stat
pub(crate) fn adjustments(race: &RaceInfo, class: &ClassInfo) -> [i32; STAT_MAX] {
    Stat::ALL.map(|stat| race.adj(stat) + class.adj(stat))
}

/// Run the roller chosen in the draft until it commits, backs out,
/// restarts or quits.
pub fn run_roller<C, U>(
    roller: Roller,
    draft: &CharacterDraft,
    catalog: &C,
    ui: &mut U,
) -> Result<RollerOutcome, BirthError>
where
    C: BirthCatalog + ?Sized,
    U: BirthUi + ?Sized,
{
    let (race, class) = chosen_role(catalog, draft)?;
    let summary = summary(draft, race, class);

    let outcome = match roller {
        Roller::PointBased => run_point_based(&summary, &adjustments(race, class), ui)?,
        Roller::Standard => run_standard(&summary, ui)?,
    };
    if let RollerOutcome::Confirmed(result) = &outcome {
        info!(packet = ?result.to_packet(), "stats rolled");
    }
    Ok(outcome)
}

fn run_point_based<U>(
    summary: &CharacterSummary,
    adjustments: &[i32; STAT_MAX],
    ui: &mut U,
) -> Result<RollerOutcome, BirthError>
where
    U: BirthUi + ?Sized,
{
    let mut buy = PointBuy::new();
    loop {
        ui.draw(&BirthScreen::PointBased(buy.view(summary, adjustments)))?;
        match buy.apply(ui.next_key()?) {
            PointStep::Continue => {}
            PointStep::Commit => return Ok(RollerOutcome::Confirmed(buy.result())),
            PointStep::Back => return Ok(RollerOutcome::Back),
            PointStep::Restart => return Ok(RollerOutcome::Restart),
            PointStep::Quit => return Ok(RollerOutcome::Quit),
        }
    }
}

fn run_standard<U>(summary: &CharacterSummary, ui: &mut U) -> Result<RollerOutcome, BirthError>
where
    U: BirthUi + ?Sized,
{
    let mut order = StatOrder::new();
    loop {
        ui.draw(&BirthScreen::Standard(order.view(summary)))?;
        match order.apply(ui.next_key()?) {
            StandardStep::Continue => {}
            StandardStep::Complete => {
                let result = order
                    .result()
                    .ok_or(BirthError::MissingChoice("stat order"))?;
                return Ok(RollerOutcome::Confirmed(result));
            }
            StandardStep::Back => return Ok(RollerOutcome::Back),
            StandardStep::Restart => return Ok(RollerOutcome::Restart),
            StandardStep::Quit => return Ok(RollerOutcome::Quit),
        }
    }
}
