//! mb-data: Static game data for the birth screens
//!
//! Contains the built-in race and class tables and JSON loading of
//! replacement catalogs and previous-character records.

mod catalog;
pub mod classes;
mod error;
pub mod races;

pub use catalog::{Catalog, load_prior, prior_from_json};
pub use classes::{CLASSES, ClassDef, get_class, num_classes};
pub use error::CatalogError;
pub use races::{RACES, RaceDef, get_race, num_races};
