pub mod battle;
pub mod factions;
pub mod odds;
pub mod roll;

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, WrapErr};
use rb_mechanics::{AttackerFaction, BattleConfig, DefenderFaction};

/// Battle inputs shared by `battle` and `roll`.
#[derive(Args, Debug)]
pub struct BattleArgs {
    /// Attacking units in the clearing (default: 3)
    #[arg(short, long)]
    pub attackers: Option<u32>,

    /// Defending units in the clearing (default: 3)
    #[arg(short, long)]
    pub defenders: Option<u32>,

    /// Attacker faction preset (see `rb factions`)
    #[arg(long, value_name = "ID")]
    pub attacker_faction: Option<String>,

    /// Defender faction preset (see `rb factions`)
    #[arg(long, value_name = "ID")]
    pub defender_faction: Option<String>,

    /// Attacker deals one extra hit
    #[arg(long)]
    pub extra_hit: bool,

    /// Attacker ignores the first hit taken
    #[arg(long)]
    pub attacker_ignore: bool,

    /// Attacker foils the defender's ambush
    #[arg(long)]
    pub foil_ambush: bool,

    /// Defender takes the high roll (Woodland Alliance)
    #[arg(long)]
    pub guerrilla_war: bool,

    /// Defender ignores the first hit taken
    #[arg(long)]
    pub defender_ignore: bool,

    /// Defender plays an ambush card
    #[arg(long)]
    pub ambush: bool,

    /// Load a battle config from a JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl BattleArgs {
    /// Layer the inputs: config file, then faction presets, then flags.
    pub fn to_config(&self) -> miette::Result<BattleConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("cannot read {}", path.display()))?;
                BattleConfig::from_json(&json)?
            }
            None => BattleConfig::default(),
        };

        if let Some(n) = self.attackers {
            config.attacker_units = n;
        }
        if let Some(n) = self.defenders {
            config.defender_units = n;
        }

        let abilities = &mut config.abilities;
        if let Some(id) = &self.attacker_faction {
            AttackerFaction::from_id(id)?.apply(&mut abilities.attacker);
        }
        if let Some(id) = &self.defender_faction {
            DefenderFaction::from_id(id)?.apply(&mut abilities.defender);
        }

        abilities.attacker.extra_hit |= self.extra_hit;
        abilities.attacker.ignore_first_hit |= self.attacker_ignore;
        abilities.attacker.foil_ambush |= self.foil_ambush;
        abilities.defender.guerrilla_war |= self.guerrilla_war;
        abilities.defender.ignore_first_hit |= self.defender_ignore;
        abilities.defender.ambush |= self.ambush;

        tracing::info!(
            attackers = config.attacker_units,
            defenders = config.defender_units,
            abilities = ?config.abilities,
            "battle config assembled"
        );
        Ok(config)
    }
}

/// Format a percentage with one decimal, rounding ties away from zero.
fn pct(value: f64) -> String {
    format!("{:.1}%", (value * 10.0).round() / 10.0)
}

/// A fixed-width text bar for a 0-100 percentage.
fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}
