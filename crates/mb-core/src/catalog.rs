//! Read-only game data consumed by the birth flow

use crate::player::{ClassId, ClassInfo, RaceId, RaceInfo, Sex};

/// Sex, race and class catalogs, keyed by stable small integer ids
pub trait BirthCatalog {
    fn races(&self) -> &[RaceInfo];

    fn classes(&self) -> &[ClassInfo];

    /// Sex options in menu order
    fn sexes(&self) -> &[Sex] {
        &[Sex::Female, Sex::Male, Sex::Neuter]
    }

    fn race(&self, id: RaceId) -> Option<&RaceInfo> {
        self.races().iter().find(|r| r.id == id)
    }

    fn class(&self, id: ClassId) -> Option<&ClassInfo> {
        self.classes().iter().find(|c| c.id == id)
    }

    /// Classes a character of `race` may choose, in catalog order.
    ///
    /// Placeholder classes are never offered; restricted races also lose
    /// the classes marked for them.
    fn selectable_classes(&self, race: &RaceInfo) -> Vec<&ClassInfo> {
        self.classes()
            .iter()
            .filter(|c| c.selectable_by(race))
            .collect()
    }
}
