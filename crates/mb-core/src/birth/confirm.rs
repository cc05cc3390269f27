//! Final confirmation of the assembled character

use tracing::info;

use crate::catalog::BirthCatalog;
use crate::error::BirthError;
use crate::player::CharacterDraft;

use super::roller::{adjustments, chosen_role, summary};
use super::ui::{BirthKey, BirthScreen, BirthUi, ConfirmView};

/// Answer to the final confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Complete,
    /// Start birth over with an empty draft
    Reset,
    Back,
    Quit,
}

impl ConfirmChoice {
    /// 'S' starts over, Escape steps back, Ctrl-X quits, anything else
    /// accepts.
    pub fn from_key(key: BirthKey) -> Self {
        match key {
            BirthKey::Char('S' | 's') => ConfirmChoice::Reset,
            BirthKey::Escape => ConfirmChoice::Back,
            BirthKey::Quit => ConfirmChoice::Quit,
            _ => ConfirmChoice::Complete,
        }
    }
}

/// Show the finished draft and read one key
pub fn final_confirm<C, U>(
    draft: &CharacterDraft,
    catalog: &C,
    ui: &mut U,
) -> Result<ConfirmChoice, BirthError>
where
    C: BirthCatalog + ?Sized,
    U: BirthUi + ?Sized,
{
    let (race, class) = chosen_role(catalog, draft)?;
    let stats = draft.stats.ok_or(BirthError::MissingChoice("stats"))?;

    ui.draw(&BirthScreen::Confirm(ConfirmView {
        summary: summary(draft, race, class),
        stats,
        adjustments: adjustments(race, class),
    }))?;

    let choice = ConfirmChoice::from_key(ui.next_key()?);
    info!(?choice, "final confirmation");
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::fixture::TestCatalog;
    use crate::birth::script::ScriptedUi;
    use crate::player::{ClassId, RaceId, RollMethod, RollerResult, Sex, StatRoll};

    #[test]
    fn test_key_mapping() {
        assert_eq!(ConfirmChoice::from_key(BirthKey::Char('S')), ConfirmChoice::Reset);
        assert_eq!(ConfirmChoice::from_key(BirthKey::Char('s')), ConfirmChoice::Reset);
        assert_eq!(ConfirmChoice::from_key(BirthKey::Escape), ConfirmChoice::Back);
        assert_eq!(ConfirmChoice::from_key(BirthKey::Quit), ConfirmChoice::Quit);
        for key in [
            BirthKey::Enter,
            BirthKey::Char('y'),
            BirthKey::Left,
            BirthKey::ManualOverride,
            BirthKey::Other,
        ] {
            assert_eq!(ConfirmChoice::from_key(key), ConfirmChoice::Complete);
        }
    }

    #[test]
    fn test_confirm_screen_shows_draft() {
        let catalog = TestCatalog::new();
        let mut draft = CharacterDraft::new("Eowyn");
        draft.sex = Some(Sex::Female);
        draft.race = Some(RaceId(0));
        draft.class = Some(ClassId(0));
        let stats = RollerResult::new(StatRoll::Points([15; 6]), RollMethod::PointBased);
        draft.stats = Some(stats);

        let mut ui = ScriptedUi::from_script("<enter>").unwrap();
        let choice = final_confirm(&draft, &catalog, &mut ui).unwrap();
        assert_eq!(choice, ConfirmChoice::Complete);

        let Some(BirthScreen::Confirm(view)) = ui.last_screen() else {
            panic!("expected confirm screen");
        };
        assert_eq!(view.summary.sex, "Female");
        assert_eq!(view.summary.class, "Warrior");
        assert_eq!(view.stats, stats);
        assert_eq!(view.adjustments, [3, -2, -2, 2, 2, 0]);
    }

    #[test]
    fn test_confirm_needs_stats() {
        let catalog = TestCatalog::new();
        let mut draft = CharacterDraft::new("Eowyn");
        draft.race = Some(RaceId(0));
        draft.class = Some(ClassId(0));
        let mut ui = ScriptedUi::default();
        let err = final_confirm(&draft, &catalog, &mut ui).unwrap_err();
        assert!(matches!(err, BirthError::MissingChoice("stats")));
    }
}
