use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rb_mechanics::{AttackerFaction, DefenderFaction};

fn mark(on: bool) -> &'static str {
    if on { "yes" } else { "" }
}

pub fn run() -> miette::Result<()> {
    println!("  {}", "Attacker Presets".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Faction", "Extra Hit", "Ignore First Hit"]);
    for faction in AttackerFaction::ALL {
        let (extra_hit, ignore) = faction.flags();
        table.add_row(vec![
            faction.id(),
            faction.display_name(),
            mark(extra_hit),
            mark(ignore),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Defender Presets".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Faction", "Guerrilla War", "Ignore First Hit"]);
    for faction in DefenderFaction::ALL {
        let (guerrilla_war, ignore) = faction.flags();
        table.add_row(vec![
            faction.id(),
            faction.display_name(),
            mark(guerrilla_war),
            mark(ignore),
        ]);
    }
    println!("{table}");

    Ok(())
}
