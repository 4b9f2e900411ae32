//! Faction presets for battle abilities.
//!
//! Each preset maps a faction id to the abilities that faction brings to a
//! battle. Presets only touch their side's two faction flags: extra hit and
//! ignore-first-hit for the attacker, guerrilla war and ignore-first-hit for
//! the defender. Foil-ambush and ambush depend on cards in hand, not on the
//! faction, so a preset leaves them alone.

use serde::{Deserialize, Serialize};

use crate::battle::{AttackerAbilities, DefenderAbilities};
use crate::error::{MechError, MechResult};

/// Which side of a battle a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The side that started the battle.
    Attacker,
    /// The side defending the clearing.
    Defender,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attacker => write!(f, "attacker"),
            Self::Defender => write!(f, "defender"),
        }
    }
}

/// Attacker presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackerFaction {
    /// No faction abilities.
    #[default]
    None,
    /// Eyrie Dynasties led by the Commander: extra hit.
    EyrieCommander,
    /// Lord of the Hundreds, Wrathful mood: extra hit.
    HundredsWrathful,
    /// Lord of the Hundreds, Stubborn mood: ignore first hit.
    HundredsStubborn,
    /// Vagabond Ronin: extra hit.
    VagabondRonin,
    /// Keepers in Iron with a relic: ignore first hit.
    KeepersRelic,
}

impl AttackerFaction {
    /// Every attacker preset in table order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::EyrieCommander,
        Self::HundredsWrathful,
        Self::HundredsStubborn,
        Self::VagabondRonin,
        Self::KeepersRelic,
    ];

    /// The lookup id, e.g. `"eyrie-commander"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::EyrieCommander => "eyrie-commander",
            Self::HundredsWrathful => "hundreds-wrathful",
            Self::HundredsStubborn => "hundreds-stubborn",
            Self::VagabondRonin => "vagabond-ronin",
            Self::KeepersRelic => "keepers-relic",
        }
    }

    /// Human-readable faction name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::EyrieCommander => "Eyrie (Commander)",
            Self::HundredsWrathful => "Lord of the Hundreds (Wrathful)",
            Self::HundredsStubborn => "Lord of the Hundreds (Stubborn)",
            Self::VagabondRonin => "Vagabond (Ronin)",
            Self::KeepersRelic => "Keepers in Iron (Relic)",
        }
    }

    /// Look up a preset by id (case-insensitive).
    pub fn from_id(id: &str) -> MechResult<Self> {
        let needle = id.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.id() == needle)
            .ok_or_else(|| MechError::UnknownFaction {
                side: Side::Attacker,
                id: id.to_string(),
            })
    }

    /// The flags this preset sets: `(extra_hit, ignore_first_hit)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::None => (false, false),
            Self::EyrieCommander | Self::HundredsWrathful | Self::VagabondRonin => (true, false),
            Self::HundredsStubborn | Self::KeepersRelic => (false, true),
        }
    }

    /// Overwrite the preset-controlled flags, keeping `foil_ambush`.
    pub fn apply(self, abilities: &mut AttackerAbilities) {
        let (extra_hit, ignore_first_hit) = self.flags();
        abilities.extra_hit = extra_hit;
        abilities.ignore_first_hit = ignore_first_hit;
    }
}

/// Defender presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefenderFaction {
    /// No faction abilities.
    #[default]
    None,
    /// Woodland Alliance: guerrilla war.
    WoodlandAlliance,
    /// Keepers in Iron with a relic: ignore first hit.
    KeepersRelic,
    /// Lord of the Hundreds, Stubborn mood: ignore first hit.
    HundredsStubborn,
}

impl DefenderFaction {
    /// Every defender preset in table order.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::WoodlandAlliance,
        Self::KeepersRelic,
        Self::HundredsStubborn,
    ];

    /// The lookup id, e.g. `"woodland-alliance"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::WoodlandAlliance => "woodland-alliance",
            Self::KeepersRelic => "keepers-relic",
            Self::HundredsStubborn => "hundreds-stubborn",
        }
    }

    /// Human-readable faction name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::WoodlandAlliance => "Woodland Alliance",
            Self::KeepersRelic => "Keepers in Iron (Relic)",
            Self::HundredsStubborn => "Lord of the Hundreds (Stubborn)",
        }
    }

    /// Look up a preset by id (case-insensitive).
    pub fn from_id(id: &str) -> MechResult<Self> {
        let needle = id.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.id() == needle)
            .ok_or_else(|| MechError::UnknownFaction {
                side: Side::Defender,
                id: id.to_string(),
            })
    }

    /// The flags this preset sets: `(guerrilla_war, ignore_first_hit)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::None => (false, false),
            Self::WoodlandAlliance => (true, false),
            Self::KeepersRelic | Self::HundredsStubborn => (false, true),
        }
    }

    /// Overwrite the preset-controlled flags, keeping `ambush`.
    pub fn apply(self, abilities: &mut DefenderAbilities) {
        let (guerrilla_war, ignore_first_hit) = self.flags();
        abilities.guerrilla_war = guerrilla_war;
        abilities.ignore_first_hit = ignore_first_hit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacker_ids_round_trip() {
        for faction in AttackerFaction::ALL {
            assert_eq!(AttackerFaction::from_id(faction.id()).unwrap(), faction);
        }
    }

    #[test]
    fn defender_ids_round_trip() {
        for faction in DefenderFaction::ALL {
            assert_eq!(DefenderFaction::from_id(faction.id()).unwrap(), faction);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            AttackerFaction::from_id(" Eyrie-Commander ").unwrap(),
            AttackerFaction::EyrieCommander
        );
    }

    #[test]
    fn unknown_attacker_faction() {
        let err = AttackerFaction::from_id("marquise").unwrap_err();
        assert!(matches!(
            err,
            MechError::UnknownFaction {
                side: Side::Attacker,
                ..
            }
        ));
    }

    #[test]
    fn vagabond_is_not_a_defender_preset() {
        assert!(DefenderFaction::from_id("vagabond-ronin").is_err());
    }

    #[test]
    fn eyrie_commander_grants_extra_hit() {
        let mut abilities = AttackerAbilities::default();
        AttackerFaction::EyrieCommander.apply(&mut abilities);
        assert!(abilities.extra_hit);
        assert!(!abilities.ignore_first_hit);
    }

    #[test]
    fn attacker_preset_keeps_foil_ambush() {
        let mut abilities = AttackerAbilities {
            extra_hit: true,
            ignore_first_hit: false,
            foil_ambush: true,
        };
        AttackerFaction::KeepersRelic.apply(&mut abilities);
        assert!(!abilities.extra_hit);
        assert!(abilities.ignore_first_hit);
        assert!(abilities.foil_ambush);
    }

    #[test]
    fn defender_preset_keeps_ambush() {
        let mut abilities = DefenderAbilities {
            guerrilla_war: false,
            ignore_first_hit: true,
            ambush: true,
        };
        DefenderFaction::WoodlandAlliance.apply(&mut abilities);
        assert!(abilities.guerrilla_war);
        assert!(!abilities.ignore_first_hit);
        assert!(abilities.ambush);
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Attacker.to_string(), "attacker");
        assert_eq!(Side::Defender.to_string(), "defender");
    }
}
