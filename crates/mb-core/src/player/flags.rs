//! Race and class trait flags
//!
//! Only the flags the birth help panels describe are modelled here.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Intrinsic object-style flags granted by a race
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u16 {
        const SUST_STR = 0x0001;
        const SUST_DEX = 0x0002;
        const SUST_CON = 0x0004;
        const PROT_BLIND = 0x0008;
        const HOLD_LIFE = 0x0010;
        const FREE_ACT = 0x0020;
        const REGEN = 0x0040;
        const SEE_INVIS = 0x0080;
        const FEATHER = 0x0100;
        const SLOW_DIGEST = 0x0200;
    }
}

bitflags! {
    /// Elemental resistances granted by a race
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Resistances: u8 {
        const POIS = 0x01;
        const LIGHT = 0x02;
        const DARK = 0x04;
        const NEXUS = 0x08;
    }
}

bitflags! {
    /// Player abilities granted by a race or class
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PlayerFlags: u32 {
        const FAST_SHOT = 0x0000_0001;
        const BRAVERY_30 = 0x0000_0002;
        const BLESS_WEAPON = 0x0000_0004;
        const ZERO_FAIL = 0x0000_0008;
        const BEAM = 0x0000_0010;
        const CHOOSE_SPELLS = 0x0000_0020;
        const KNOW_MUSHROOM = 0x0000_0040;
        const KNOW_ZAPPER = 0x0000_0080;
        const SEE_ORE = 0x0000_0100;
        const NO_MANA = 0x0000_0200;
        const CHARM = 0x0000_0400;
        const UNARMED_COMBAT = 0x0000_0800;
        const MARTIAL_ARTS = 0x0000_1000;
        const STEAL = 0x0000_2000;
        const SHAPECHANGE = 0x0000_4000;
        const ANIMAL = 0x0000_8000;
        const THUNDERLORD = 0x0001_0000;
        /// Race restricted to a reduced class list
        const DRAGON = 0x0002_0000;
        const COMBAT_REGEN = 0x0004_0000;
        const UNLIGHT = 0x0008_0000;
    }
}

bitflags! {
    /// Class catalog markers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassFlags: u8 {
        /// Internal class that can never be chosen at birth
        const PLACEHOLDER = 0x01;
        /// Class unavailable to races with the restricted trait
        const NOT_FOR_RESTRICTED = 0x02;
    }
}

const OBJECT_FLAG_DESC: &[(ObjectFlags, &str)] = &[
    (ObjectFlags::SUST_STR, "Sustains strength"),
    (ObjectFlags::SUST_DEX, "Sustains dexterity"),
    (ObjectFlags::SUST_CON, "Sustains constitution"),
    (ObjectFlags::PROT_BLIND, "Resists blindness"),
    (ObjectFlags::HOLD_LIFE, "Sustains experience"),
    (ObjectFlags::FREE_ACT, "Resists paralysis"),
    (ObjectFlags::REGEN, "Regenerates quickly"),
    (ObjectFlags::SEE_INVIS, "Sees invisible creatures"),
    (ObjectFlags::FEATHER, "Falls like a feather"),
    (ObjectFlags::SLOW_DIGEST, "Digests food slowly"),
];

const RESIST_DESC: &[(Resistances, &str)] = &[
    (Resistances::POIS, "Resists poison"),
    (Resistances::LIGHT, "Resists light damage"),
    (Resistances::DARK, "Resists darkness damage"),
    (Resistances::NEXUS, "Resists nexus"),
];

// Flags with no entry are mechanical and never shown at birth.
const PLAYER_FLAG_DESC: &[(PlayerFlags, &str)] = &[
    (PlayerFlags::FAST_SHOT, "Receives extra shots with missile weapons"),
    (PlayerFlags::BRAVERY_30, "Gains immunity to fear"),
    (PlayerFlags::BLESS_WEAPON, "Gets bonuses with blunt weapons"),
    (PlayerFlags::ZERO_FAIL, "Advanced spellcasting"),
    (PlayerFlags::BEAM, "Frequently casts beams"),
    (PlayerFlags::KNOW_MUSHROOM, "Identifies mushrooms"),
    (PlayerFlags::KNOW_ZAPPER, "Identifies magic devices"),
    (PlayerFlags::SEE_ORE, "Senses ore and minerals"),
    (PlayerFlags::CHARM, "Is charming"),
    (PlayerFlags::UNARMED_COMBAT, "Fights well unarmed"),
    (PlayerFlags::MARTIAL_ARTS, "Knows martial arts"),
    (PlayerFlags::STEAL, "Can steal from monsters"),
    (PlayerFlags::SHAPECHANGE, "Can change shape"),
    (PlayerFlags::ANIMAL, "Is an animal"),
    (PlayerFlags::THUNDERLORD, "Can summon eagles"),
    (PlayerFlags::DRAGON, "Grows into a mighty dragon"),
    (PlayerFlags::COMBAT_REGEN, "Regenerates in combat"),
    (PlayerFlags::UNLIGHT, "Sees and fights well in darkness"),
];

fn describe<F: bitflags::Flags + Copy>(
    set: F,
    table: &'static [(F, &'static str)],
) -> impl Iterator<Item = &'static str> {
    table
        .iter()
        .filter(move |(flag, _)| set.contains(*flag))
        .map(|(_, desc)| *desc)
}

impl ObjectFlags {
    /// Help-panel descriptions of the flags in this set, in flag order
    pub fn descriptions(&self) -> impl Iterator<Item = &'static str> {
        describe(*self, OBJECT_FLAG_DESC)
    }
}

impl Resistances {
    /// Help-panel descriptions of the resistances in this set
    pub fn descriptions(&self) -> impl Iterator<Item = &'static str> {
        describe(*self, RESIST_DESC)
    }
}

impl PlayerFlags {
    /// Help-panel descriptions of the documented flags in this set
    pub fn descriptions(&self) -> impl Iterator<Item = &'static str> {
        describe(*self, PLAYER_FLAG_DESC)
    }
}

// Manual serde: flags travel as raw bits in catalog files
macro_rules! bits_serde {
    ($flags:ty, $bits:ty) => {
        impl Serialize for $flags {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.bits().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $flags {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bits = <$bits>::deserialize(deserializer)?;
                Ok(<$flags>::from_bits_truncate(bits))
            }
        }
    };
}

bits_serde!(ObjectFlags, u16);
bits_serde!(Resistances, u8);
bits_serde!(PlayerFlags, u32);
bits_serde!(ClassFlags, u8);
