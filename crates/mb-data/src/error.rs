use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate game data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the {0} table is empty")]
    Empty(&'static str),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u8 },

    #[error("{kind} at position {index} has id {id}")]
    IdMismatch {
        kind: &'static str,
        index: usize,
        id: u8,
    },

    #[error("race {0} has no selectable class")]
    NoClassesFor(String),
}
