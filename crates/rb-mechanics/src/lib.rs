//! Odds engine for two-die clearing battles.
//!
//! Enumerates every face pair of the two twelve-sided battle dice and
//! aggregates the results. Provides the raw difference distribution of
//! the dice, a battle resolver with faction ability modifiers, and the
//! faction preset tables that front ends use to pre-fill those abilities.

pub mod battle;
pub mod dice;
pub mod distribution;
pub mod error;
pub mod preset;

pub use battle::{
    AbilityConfig, AttackerAbilities, BattleConfig, BattleResult, DefenderAbilities, IgnoreUse,
    ResultMatrix, ScenarioOutcome, resolve_battle, resolve_scenario, round2,
};
pub use dice::{Die, FacePair, face_pairs};
pub use distribution::{DistributionStats, compute_distribution};
pub use error::{MechError, MechResult};
pub use preset::{AttackerFaction, DefenderFaction, Side};
