//! Battle resolution over every face pair.
//!
//! A battle is one exchange of hits between an attacker and a defender.
//! [`resolve_battle`] runs [`resolve_scenario`] on all 144 face pairs and
//! aggregates the losses into a [`ResultMatrix`] and expected values.

pub mod ability;
pub mod matrix;
pub mod scenario;

pub use ability::{AbilityConfig, AttackerAbilities, DefenderAbilities};
pub use matrix::ResultMatrix;
pub use scenario::{IgnoreUse, ScenarioOutcome, resolve_scenario};

use serde::{Deserialize, Serialize};

use crate::dice::face_pairs;
use crate::error::{MechError, MechResult};

/// Loss bucket used when no active ability can push a loss past 3.
pub const BASE_LOSS_CAP: u32 = 3;
/// Loss bucket used when extra hit or an ambush is in play.
pub const EXTENDED_LOSS_CAP: u32 = 4;

/// Inputs for one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Attacking units in the clearing.
    pub attacker_units: u32,
    /// Defending units in the clearing.
    pub defender_units: u32,
    /// Ability flags for both sides.
    pub abilities: AbilityConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

impl BattleConfig {
    /// A battle with no abilities.
    pub fn new(attacker_units: u32, defender_units: u32) -> Self {
        Self {
            attacker_units,
            defender_units,
            abilities: AbilityConfig::default(),
        }
    }

    /// Replace all ability flags.
    pub fn with_abilities(mut self, abilities: AbilityConfig) -> Self {
        self.abilities = abilities;
        self
    }

    /// Replace the attacker's ability flags.
    pub fn with_attacker(mut self, attacker: AttackerAbilities) -> Self {
        self.abilities.attacker = attacker;
        self
    }

    /// Replace the defender's ability flags.
    pub fn with_defender(mut self, defender: DefenderAbilities) -> Self {
        self.abilities.defender = defender;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))
    }

    /// Highest loss bucket for this battle's result matrix.
    pub fn loss_cap(&self) -> u32 {
        if self.abilities.attacker.extra_hit || self.abilities.ambush_triggered() {
            EXTENDED_LOSS_CAP
        } else {
            BASE_LOSS_CAP
        }
    }
}

/// Aggregated outcome of every face pair for one battle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleResult {
    /// Scenario counts by (attacker loss, defender loss).
    pub matrix: ResultMatrix,
    /// Number of face pairs enumerated.
    pub total_scenarios: u32,
    /// Mean attacker loss per scenario.
    pub expected_attacker_loss: f64,
    /// Mean defender loss per scenario.
    pub expected_defender_loss: f64,
}

impl BattleResult {
    /// Expected defender loss minus expected attacker loss.
    pub fn net_change(&self) -> f64 {
        self.expected_defender_loss - self.expected_attacker_loss
    }
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Enumerate all face pairs and aggregate the battle outcome.
pub fn resolve_battle(config: &BattleConfig) -> BattleResult {
    let mut matrix = ResultMatrix::new(config.loss_cap());
    let mut total_scenarios = 0u32;
    let mut attacker_sum = 0u64;
    let mut defender_sum = 0u64;

    for faces in face_pairs() {
        let outcome = resolve_scenario(config, faces);
        tracing::trace!(
            %faces,
            attacker_loss = outcome.attacker_loss,
            defender_loss = outcome.defender_loss,
            "scenario"
        );
        total_scenarios += 1;
        attacker_sum += u64::from(outcome.attacker_loss);
        defender_sum += u64::from(outcome.defender_loss);
        matrix.record(outcome.attacker_loss, outcome.defender_loss);
    }

    let mean = |sum: u64| {
        if total_scenarios == 0 {
            0.0
        } else {
            sum as f64 / f64::from(total_scenarios)
        }
    };
    let result = BattleResult {
        matrix,
        total_scenarios,
        expected_attacker_loss: mean(attacker_sum),
        expected_defender_loss: mean(defender_sum),
    };

    tracing::debug!(
        attackers = config.attacker_units,
        defenders = config.defender_units,
        cap = result.matrix.cap(),
        ev_attacker = result.expected_attacker_loss,
        ev_defender = result.expected_defender_loss,
        "battle resolved"
    );

    result
}
