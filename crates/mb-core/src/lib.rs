//! mb-core: character birth logic for a MAngband-style client
//!
//! This crate contains the birth state machine, the menu cascade and both
//! stat rollers with no terminal dependencies. A frontend drives it by
//! implementing [`birth::BirthUi`]; game data comes in through
//! [`catalog::BirthCatalog`].

pub mod birth;
pub mod catalog;
pub mod player;

mod error;
mod rng;

pub use catalog::BirthCatalog;
pub use error::BirthError;
pub use rng::{BirthRng, ChoiceRng};
