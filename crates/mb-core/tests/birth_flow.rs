mod common;

use common::{LastRng, MiniCatalog};
use mb_core::birth::{BirthMachine, BirthOutcome, BirthScreen, ScriptedUi, Stage};
use mb_core::player::{
    CharacterDraft, ClassId, MAX_BIRTH_POINTS, PriorCharacter, QuickKind, RaceId, RollMethod,
    Roller, Sex, StatRoll,
};
use mb_core::{BirthError, BirthRng};

fn run_script(keys: &str) -> (BirthOutcome, ScriptedUi) {
    let catalog = MiniCatalog::new();
    let mut ui = ScriptedUi::from_script(keys).unwrap();
    let outcome = BirthMachine::new(&catalog, LastRng, CharacterDraft::new("Rincewind"))
        .run(&mut ui)
        .unwrap();
    (outcome, ui)
}

#[test]
fn test_random_picks_through_cascade() {
    let (outcome, _) = run_script("* * * <enter> <enter> <enter>");
    let BirthOutcome::Completed(draft) = outcome else {
        panic!("expected a finished character, got {:?}", outcome);
    };
    assert_eq!(draft.name, "Rincewind");
    assert_eq!(draft.sex, Some(Sex::Neuter));
    assert_eq!(draft.race, Some(RaceId(2)));
    // Dragons only see Warrior and Mage
    assert_eq!(draft.class, Some(ClassId(1)));
    assert_eq!(draft.roller, Some(Roller::PointBased));
    assert_eq!(draft.stats.map(|s| s.method), Some(RollMethod::PointBased));
}

#[test]
fn test_back_from_race_restores_sex_cursor() {
    let (_, ui) = run_script("c c <esc> <quit>");
    let cursors: Vec<(usize, usize)> = ui
        .screens()
        .iter()
        .filter_map(|s| match s {
            BirthScreen::Menus(v) => v.active().map(|m| (v.menus.len(), m.cursor)),
            _ => None,
        })
        .collect();
    // sex, sex after 'c', race, then sex again with the committed cursor
    assert_eq!(cursors, vec![(1, 0), (1, 2), (2, 0), (1, 2)]);
}

#[test]
fn test_point_pool_never_exceeded_on_screen() {
    let mut keys = String::from("<enter> <enter> <enter> <enter> ");
    for _ in 0..6 {
        keys.push_str("<right> <right> <right> <right> <right> <right> <right> <right> <down> ");
    }
    keys.push_str("<enter> <enter>");
    let (outcome, ui) = run_script(&keys);

    for screen in ui.screens() {
        if let BirthScreen::PointBased(view) = screen {
            assert!(view.total_cost <= MAX_BIRTH_POINTS);
            assert!(view.rows.iter().all(|r| (10..=18).contains(&r.value)));
        }
    }

    let BirthOutcome::Completed(draft) = outcome else {
        panic!("expected a finished character");
    };
    let Some(StatRoll::Points(values)) = draft.stats.map(|s| s.roll) else {
        panic!("expected point-based values");
    };
    assert_eq!(values, [18, 17, 10, 10, 10, 10]);
}

#[test]
fn test_reset_then_rebuild() {
    let (outcome, _) = run_script(
        "b <enter> <enter> <enter> <enter> <enter> S \
         <enter> <enter> <enter> <enter> <enter> <enter>",
    );
    let BirthOutcome::Completed(draft) = outcome else {
        panic!("expected a finished character");
    };
    // Second pass took the defaults, not the first pass's choices
    assert_eq!(draft.sex, Some(Sex::Female));
}

#[test]
fn test_quick_start_bypasses_menus() {
    let catalog = MiniCatalog::new();
    let prior = PriorCharacter {
        sex: Sex::Male,
        race: RaceId(1),
        class: ClassId(0),
        stats: [16, 14, 12, 18, 10, 11],
        kind: QuickKind::Reroll,
    };
    let mut ui = ScriptedUi::from_script("y y").unwrap();
    let outcome = BirthMachine::new(&catalog, BirthRng::new(7), CharacterDraft::new("Bilbo"))
        .with_prior(Some(prior.clone()))
        .run(&mut ui)
        .unwrap();

    let BirthOutcome::Completed(draft) = outcome else {
        panic!("expected a finished character");
    };
    let stats = draft.stats.unwrap();
    assert_eq!(stats.roll, StatRoll::Points(prior.stats));
    assert_eq!(stats.method, RollMethod::Quick);
    assert!(ui.screens().iter().all(|s| matches!(s, BirthScreen::QuickStart(_))));
}

#[test]
fn test_step_by_step_stages() {
    let catalog = MiniCatalog::new();
    let mut machine = BirthMachine::new(&catalog, LastRng, CharacterDraft::new("Tester"));
    let mut ui = ScriptedUi::from_script("<enter> <enter> <enter> <down><enter> <esc>").unwrap();

    let mut seen = vec![machine.stage()];
    for _ in 0..6 {
        seen.push(machine.step(&mut ui).unwrap());
    }
    assert_eq!(
        seen,
        vec![
            Stage::Reset,
            Stage::SexChoice,
            Stage::RaceChoice,
            Stage::ClassChoice,
            Stage::RollerChoice,
            Stage::Roller,
            Stage::RollerChoice,
        ]
    );
}

#[test]
fn test_exhausted_input_is_an_error() {
    let catalog = MiniCatalog::new();
    let mut ui = ScriptedUi::from_script("<enter>").unwrap();
    let err = BirthMachine::new(&catalog, LastRng, CharacterDraft::new("Tester"))
        .run(&mut ui)
        .unwrap_err();
    assert!(matches!(err, BirthError::Io(_)));
}

#[test]
fn test_draft_serializes() {
    let (outcome, _) = run_script("<enter> <enter> <enter> <enter> <enter> <enter>");
    let BirthOutcome::Completed(draft) = outcome else {
        panic!("expected a finished character");
    };
    let json = serde_json::to_string(&draft).unwrap();
    let back: CharacterDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);
}
