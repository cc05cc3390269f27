//! The birth stage machine

use tracing::{debug, info, info_span, warn};

use crate::catalog::BirthCatalog;
use crate::error::BirthError;
use crate::player::{CharacterDraft, PriorCharacter, RollerResult, StatRoll};
use crate::rng::ChoiceRng;

use super::cascade::run_cascade;
use super::confirm::{ConfirmChoice, final_confirm};
use super::quick::{QuickStart, offer_quick_start};
use super::roller::{RollerOutcome, run_roller};
use super::stage::Stage;
use super::ui::BirthUi;

/// How a birth run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthOutcome {
    /// Every field of the draft is set
    Completed(CharacterDraft),
    /// Player backed out of the first menu
    Abandoned,
    /// Player asked to quit the client
    Quit,
}

/// Sequences the birth stages over one draft.
///
/// The draft, the pending quick-start record and the chosen roller all
/// live here for the length of one run.
pub struct BirthMachine<'a, C: BirthCatalog + ?Sized, R: ChoiceRng> {
    catalog: &'a C,
    rng: R,
    prior: Option<PriorCharacter>,
    stage: Stage,
    draft: CharacterDraft,
}

impl<'a, C: BirthCatalog + ?Sized, R: ChoiceRng> BirthMachine<'a, C, R> {
    pub fn new(catalog: &'a C, rng: R, draft: CharacterDraft) -> Self {
        Self {
            catalog,
            rng,
            prior: None,
            stage: Stage::Reset,
            draft,
        }
    }

    /// Offer quick start from this record before the first menu
    pub fn with_prior(mut self, prior: Option<PriorCharacter>) -> Self {
        self.prior = prior;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Run birth to a terminal stage
    pub fn run<U: BirthUi + ?Sized>(mut self, ui: &mut U) -> Result<BirthOutcome, BirthError> {
        let _span = info_span!("birth", name = %self.draft.name).entered();
        self.check_catalog()?;

        if let Some(prior) = self.prior.take() {
            match self.quick_start(&prior, ui)? {
                QuickStart::Accepted => return Ok(BirthOutcome::Completed(self.draft)),
                QuickStart::Quit => {
                    info!("quit at quick start");
                    return Ok(BirthOutcome::Quit);
                }
                QuickStart::Declined => {}
            }
        }

        while !self.stage.is_terminal() {
            self.step(ui)?;
        }

        let outcome = match self.stage {
            Stage::Complete => BirthOutcome::Completed(self.draft),
            Stage::Quit => {
                info!("quit during birth");
                BirthOutcome::Quit
            }
            _ => {
                info!("birth abandoned");
                BirthOutcome::Abandoned
            }
        };
        Ok(outcome)
    }

    /// Run the handler of the current stage once and move to the stage
    /// it returns
    pub fn step<U: BirthUi + ?Sized>(&mut self, ui: &mut U) -> Result<Stage, BirthError> {
        self.check_prerequisites()?;

        let next = match self.stage {
            Stage::Reset => Stage::SexChoice,
            stage @ (Stage::SexChoice
            | Stage::RaceChoice
            | Stage::ClassChoice
            | Stage::RollerChoice) => {
                run_cascade(stage, &mut self.draft, self.catalog, ui, &mut self.rng)?
            }
            Stage::Roller => {
                let roller = self.draft.roller.ok_or(BirthError::MissingChoice("roller"))?;
                match run_roller(roller, &self.draft, self.catalog, ui)? {
                    RollerOutcome::Confirmed(result) => {
                        self.draft.stats = Some(result);
                        Stage::FinalConfirm
                    }
                    RollerOutcome::Back => Stage::Roller.prev(),
                    RollerOutcome::Restart => Stage::Roller,
                    RollerOutcome::Quit => Stage::Quit,
                }
            }
            Stage::FinalConfirm => match final_confirm(&self.draft, self.catalog, ui)? {
                ConfirmChoice::Complete => Stage::Complete,
                ConfirmChoice::Reset => {
                    self.draft.reset();
                    Stage::Reset
                }
                ConfirmChoice::Back => Stage::FinalConfirm.prev(),
                ConfirmChoice::Quit => Stage::Quit,
            },
            terminal => terminal,
        };

        debug!(from = %self.stage, to = %next, "stage transition");
        self.stage = next;
        Ok(next)
    }

    fn check_catalog(&self) -> Result<(), BirthError> {
        if self.catalog.sexes().is_empty() {
            return Err(BirthError::EmptyCatalog("sex"));
        }
        if self.catalog.races().is_empty() {
            return Err(BirthError::EmptyCatalog("race"));
        }
        if self.catalog.classes().is_empty() {
            return Err(BirthError::EmptyCatalog("class"));
        }
        Ok(())
    }

    /// No stage runs with an earlier stage's field unset
    fn check_prerequisites(&self) -> Result<(), BirthError> {
        let draft = &self.draft;
        let fields = [
            (draft.sex.is_some(), "sex"),
            (draft.race.is_some(), "race"),
            (draft.class.is_some(), "class"),
            (draft.roller.is_some(), "roller"),
            (draft.stats.is_some(), "stats"),
        ];
        let needed = match self.stage {
            Stage::RaceChoice => 1,
            Stage::ClassChoice => 2,
            Stage::RollerChoice => 3,
            Stage::Roller => 4,
            Stage::FinalConfirm => 5,
            _ => 0,
        };
        match fields[..needed].iter().find(|(set, _)| !*set) {
            Some(&(_, field)) => Err(BirthError::MissingChoice(field)),
            None => Ok(()),
        }
    }

    fn quick_start<U: BirthUi + ?Sized>(
        &mut self,
        prior: &PriorCharacter,
        ui: &mut U,
    ) -> Result<QuickStart, BirthError> {
        if self.catalog.race(prior.race).is_none() {
            warn!(race = %prior.race, "previous character has an unknown race");
            return Err(BirthError::UnknownRace(prior.race));
        }
        if self.catalog.class(prior.class).is_none() {
            warn!(class = %prior.class, "previous character has an unknown class");
            return Err(BirthError::UnknownClass(prior.class));
        }

        let answer = offer_quick_start(ui)?;
        if answer == QuickStart::Accepted {
            self.draft.sex = Some(prior.sex);
            self.draft.race = Some(prior.race);
            self.draft.class = Some(prior.class);
            self.draft.roller = None;
            self.draft.stats = Some(RollerResult::new(
                StatRoll::Points(prior.stats),
                prior.kind.method(),
            ));
            self.stage = Stage::Complete;
            info!(method = %prior.kind.method(), "character rebuilt from previous one");
        }
        Ok(answer)
    }
}
