//! Resolution of a single face pair.
//!
//! The modifier pipeline always runs in the same order: ambush, roll
//! allocation, bonus hits, capacity clamp, one-time mitigation, totals.
//! Ignore-first-hit state lives only for the duration of one call.

use serde::Serialize;

use super::BattleConfig;
use crate::dice::FacePair;

/// Hits dealt by an unfoiled ambush before any mitigation.
pub const AMBUSH_HITS: u32 = 2;

/// Where the attacker's ignore-first-hit was spent in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreUse {
    /// Not spent, either unavailable or nothing to absorb.
    Unused,
    /// Absorbed one ambush hit.
    Ambush,
    /// Absorbed one dice hit.
    Dice,
}

/// Losses for both sides from one face pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// The rolled faces.
    pub faces: FacePair,
    /// Attacker units removed by the ambush, after mitigation and clamping.
    pub ambush_damage: u32,
    /// Total attacker units lost.
    pub attacker_loss: u32,
    /// Total defender units lost.
    pub defender_loss: u32,
    /// Where the attacker's ignore-first-hit went.
    pub attacker_ignore: IgnoreUse,
    /// Whether the defender's ignore-first-hit absorbed a dice hit.
    pub defender_ignore_used: bool,
}

/// Run the modifier pipeline for one face pair.
pub fn resolve_scenario(config: &BattleConfig, faces: FacePair) -> ScenarioOutcome {
    let abilities = &config.abilities;
    let attacker_units = config.attacker_units;
    let defender_units = config.defender_units;
    let mut attacker_ignore = IgnoreUse::Unused;

    // Ambush strikes before the roll and thins the attacker's hitting power.
    let mut ambush_damage = 0;
    let mut attacker_capacity = attacker_units;
    if abilities.ambush_triggered() {
        ambush_damage = AMBUSH_HITS;
        if abilities.attacker.ignore_first_hit {
            ambush_damage -= 1;
            attacker_ignore = IgnoreUse::Ambush;
        }
        ambush_damage = ambush_damage.min(attacker_units);
        attacker_capacity = attacker_units - ambush_damage;
    }

    let (mut attacker_damage, defender_damage) = if abilities.defender.guerrilla_war {
        (faces.low(), faces.high())
    } else {
        (faces.high(), faces.low())
    };

    if abilities.attacker.extra_hit {
        attacker_damage += 1;
    }
    // Defenseless
    if defender_units == 0 {
        attacker_damage += 1;
    }

    let mut defender_loss = attacker_damage.min(attacker_capacity).min(defender_units);
    let mut dice_to_attacker = defender_damage.min(defender_units).min(attacker_capacity);

    if abilities.attacker.ignore_first_hit
        && attacker_ignore == IgnoreUse::Unused
        && dice_to_attacker > 0
    {
        dice_to_attacker -= 1;
        attacker_ignore = IgnoreUse::Dice;
    }

    // Independent of the attacker's ambush bookkeeping.
    let mut defender_ignore_used = false;
    if abilities.defender.ignore_first_hit && defender_loss > 0 {
        defender_loss -= 1;
        defender_ignore_used = true;
    }

    let attacker_loss = (ambush_damage + dice_to_attacker).min(attacker_units);

    ScenarioOutcome {
        faces,
        ambush_damage,
        attacker_loss,
        defender_loss,
        attacker_ignore,
        defender_ignore_used,
    }
}
