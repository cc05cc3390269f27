//! Catalog assembled from the built-in tables or a JSON file

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use mb_core::BirthCatalog;
use mb_core::player::{ClassId, ClassInfo, PriorCharacter, RaceId, RaceInfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classes::{get_class, num_classes};
use crate::error::CatalogError;
use crate::races::{get_race, num_races};

/// Races and classes offered at birth.
///
/// A race's or class's id equals its position in its table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub races: Vec<RaceInfo>,
    pub classes: Vec<ClassInfo>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in race and class tables
    pub fn builtin() -> Self {
        Self {
            races: (0..num_races())
                .filter_map(|i| Some(get_race(i)?.to_info(RaceId(i as u8))))
                .collect(),
            classes: (0..num_classes())
                .filter_map(|i| Some(get_class(i)?.to_info(ClassId(i as u8))))
                .collect(),
        }
    }

    /// Parse and validate a catalog
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = read(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            races = catalog.races.len(),
            classes = catalog.classes.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the birth screens rely on
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.races.is_empty() {
            return Err(CatalogError::Empty("race"));
        }
        if self.classes.is_empty() {
            return Err(CatalogError::Empty("class"));
        }

        check_ids("race", self.races.iter().map(|r| r.id.0))?;
        check_ids("class", self.classes.iter().map(|c| c.id.0))?;

        for race in &self.races {
            if self.selectable_classes(race).is_empty() {
                return Err(CatalogError::NoClassesFor(race.name.clone()));
            }
        }
        debug!("catalog valid");
        Ok(())
    }
}

fn check_ids(kind: &'static str, ids: impl Iterator<Item = u8>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
        if index != id as usize {
            return Err(CatalogError::IdMismatch { kind, index, id });
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl BirthCatalog for Catalog {
    fn races(&self) -> &[RaceInfo] {
        &self.races
    }

    fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }
}

/// Parse a previous-character record
pub fn prior_from_json(json: &str) -> Result<PriorCharacter, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a previous-character record for quick start
pub fn load_prior(path: &Path) -> Result<PriorCharacter, CatalogError> {
    let prior = prior_from_json(&read(path)?)?;
    info!(path = %path.display(), race = %prior.race, class = %prior.class, "previous character loaded");
    Ok(prior)
}
