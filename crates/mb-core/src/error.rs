//! Birth errors
//!
//! User-correctable paths (Back, Reset, Quit) are stage transitions, not
//! errors. What remains here is terminal I/O failure and broken game data.

use thiserror::Error;

use crate::birth::Stage;
use crate::player::{ClassId, RaceId};

#[derive(Debug, Error)]
pub enum BirthError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the {0} catalog has no selectable entries")]
    EmptyCatalog(&'static str),

    #[error("unknown race id {0}")]
    UnknownRace(RaceId),

    #[error("unknown class id {0}")]
    UnknownClass(ClassId),

    #[error("{0} must be chosen before this stage")]
    MissingChoice(&'static str),

    #[error("stage {0} has no menu")]
    NotAMenuStage(Stage),
}
