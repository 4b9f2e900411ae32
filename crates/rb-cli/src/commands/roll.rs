use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rb_mechanics::dice::roll_pair;
use rb_mechanics::{IgnoreUse, resolve_scenario};

use super::BattleArgs;

pub fn run(args: &BattleArgs, seed: Option<u64>) -> miette::Result<()> {
    let config = args.to_config()?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let faces = roll_pair(&mut rng);
    let outcome = resolve_scenario(&config, faces);
    tracing::debug!(seed, %faces, "rolled");

    println!(
        "  {} {} {}",
        "Roll".bold(),
        faces,
        format!("(seed={seed})").dimmed()
    );

    let active = config.abilities.active_labels();
    if !active.is_empty() {
        println!("  Active: {}", active.join(", ").yellow());
    }
    println!();

    if outcome.ambush_damage > 0 {
        println!(
            "  {} attacker loses {} before the roll",
            "AMBUSH".red().bold(),
            outcome.ambush_damage
        );
    }
    match outcome.attacker_ignore {
        IgnoreUse::Ambush => println!("  Attacker ignored the first ambush hit"),
        IgnoreUse::Dice => println!("  Attacker ignored the first dice hit"),
        IgnoreUse::Unused => {}
    }
    if outcome.defender_ignore_used {
        println!("  Defender ignored the first hit");
    }

    println!(
        "  Attacker loses {}",
        outcome.attacker_loss.to_string().red().bold()
    );
    println!(
        "  Defender loses {}",
        outcome.defender_loss.to_string().green().bold()
    );

    Ok(())
}
