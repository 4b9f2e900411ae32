use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use miette::IntoDiagnostic;
use rb_mechanics::compute_distribution;

use super::{bar, pct};

pub fn run(json: bool) -> miette::Result<()> {
    let stats = compute_distribution();

    if json {
        let out = serde_json::to_string_pretty(&stats).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Dice Difference".bold(),
        "(two d12 battle dice, 144 face pairs)".dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["|d1 - d2|", "Probability"]);
    for (label, value) in stats.entries() {
        table.add_row(vec![label.to_string(), pct(value)]);
    }
    println!("{table}");
    println!();

    for (label, value) in stats.entries() {
        let line = bar(value, 40);
        let line = if label.starts_with('=') {
            line.magenta()
        } else {
            line.cyan()
        };
        println!("  {label:>2} [{line}] {:>6}", pct(value));
    }

    Ok(())
}
