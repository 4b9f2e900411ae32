//! Ability flags that modify how a battle resolves.

use serde::{Deserialize, Serialize};

/// Abilities available to the attacker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackerAbilities {
    /// Deal one extra hit on top of the rolled damage.
    pub extra_hit: bool,
    /// Ignore the first hit taken, from ambush or dice.
    pub ignore_first_hit: bool,
    /// Cancel a defender's ambush.
    pub foil_ambush: bool,
}

/// Abilities available to the defender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenderAbilities {
    /// The defender takes the higher roll instead of the lower one.
    pub guerrilla_war: bool,
    /// Ignore the first hit dealt by the attacker's dice.
    pub ignore_first_hit: bool,
    /// Deal two hits to the attacker before the dice are rolled.
    pub ambush: bool,
}

/// Ability flags for both sides of one battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityConfig {
    /// Attacker flags.
    pub attacker: AttackerAbilities,
    /// Defender flags.
    pub defender: DefenderAbilities,
}

impl AbilityConfig {
    /// True when the defender ambushes and the attacker cannot foil it.
    pub fn ambush_triggered(&self) -> bool {
        self.defender.ambush && !self.attacker.foil_ambush
    }

    /// Short labels for every active ability, in a fixed order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.defender.guerrilla_war {
            labels.push("Guerrilla War");
        }
        if self.attacker.extra_hit {
            labels.push("Extra Hit (Att)");
        }
        if self.attacker.ignore_first_hit {
            labels.push("Ignore Hit (Att)");
        }
        if self.defender.ignore_first_hit {
            labels.push("Ignore Hit (Def)");
        }
        if self.defender.ambush {
            if self.attacker.foil_ambush {
                labels.push("Ambush (Foiled)");
            } else {
                labels.push("Ambush");
            }
        }
        labels
    }
}
