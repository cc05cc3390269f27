//! Interactive character birth
//!
//! [`BirthMachine`] sequences the stages. Each stage handler draws a
//! [`BirthScreen`] through a [`BirthUi`] and blocks on its next key.

mod cascade;
mod confirm;
mod help;
mod machine;
mod menu;
mod quick;
mod roller;
mod script;
mod stage;
mod ui;

pub use cascade::{CascadeStep, active_steps, run_cascade};
pub use confirm::{ConfirmChoice, final_confirm};
pub use help::{BrowseHelp, ClassHelp, RaceHelp};
pub use machine::{BirthMachine, BirthOutcome};
pub use menu::{MenuChoiceSet, MenuOutcome, select_one};
pub use quick::{QuickStart, offer_quick_start};
pub use roller::{
    ORDER_THRESHOLDS, PointBuy, PointStep, RollerOutcome, StandardStep, StatOrder, run_roller,
};
pub use script::{ScriptError, ScriptedUi, parse_keys};
pub use stage::Stage;
pub use ui::{
    BirthKey, BirthScreen, BirthUi, CharacterSummary, ConfirmView, MENU_INSTRUCTIONS, MenuView,
    MenusView, PointBasedView, PointRow, QuickPrompt, StandardView,
};

#[cfg(test)]
pub(crate) mod fixture;
