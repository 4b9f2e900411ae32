use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use miette::{IntoDiagnostic, WrapErr};
use rb_mechanics::{BattleConfig, BattleResult, resolve_battle, round2};

use super::{BattleArgs, pct};

pub fn run(args: &BattleArgs, json: bool, output: Option<&Path>) -> miette::Result<()> {
    let config = args.to_config()?;
    let result = resolve_battle(&config);

    if output.is_some() {
        colored::control::set_override(false);
    }

    let content = if json {
        render_json(&config, &result)?
    } else {
        render_text(&config, &result)
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write to {}", path.display()))?;
        println!("  Wrote battle odds to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn render_json(config: &BattleConfig, result: &BattleResult) -> miette::Result<String> {
    let export = serde_json::json!({
        "config": config,
        "active_abilities": config.abilities.active_labels(),
        "result": result,
        "row_sums": result.matrix.row_sums(),
        "col_sums": result.matrix.col_sums(),
        "net_change": displayed_net_change(result),
    });
    let mut out = serde_json::to_string_pretty(&export).into_diagnostic()?;
    out.push('\n');
    Ok(out)
}

/// Net change taken from the two rounded EVs so it agrees with them on screen.
fn displayed_net_change(result: &BattleResult) -> f64 {
    round2(round2(result.expected_defender_loss) - round2(result.expected_attacker_loss))
}

fn render_text(config: &BattleConfig, result: &BattleResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {} {}\n",
        "Battle".bold(),
        format!(
            "({} attackers vs {} defenders, {} scenarios)",
            config.attacker_units, config.defender_units, result.total_scenarios
        )
        .dimmed()
    ));

    let active = config.abilities.active_labels();
    if active.is_empty() {
        out.push_str(&format!("  Active: {}\n", "none".dimmed()));
    } else {
        out.push_str(&format!("  Active: {}\n", active.join(", ").yellow()));
    }
    out.push('\n');

    out.push_str(&format!(
        "  Avg Attacker Loss        {}\n",
        format!("{:.2}", round2(result.expected_attacker_loss)).red()
    ));
    out.push_str(&format!(
        "  Avg Defender Loss        {}\n",
        format!("{:.2}", round2(result.expected_defender_loss)).green()
    ));
    out.push_str(&format!(
        "  Net Change (Def - Att)   {:.2}\n",
        displayed_net_change(result)
    ));
    out.push('\n');

    out.push_str(&format!("{}\n", matrix_table(result)));
    out
}

fn matrix_table(result: &BattleResult) -> Table {
    let matrix = &result.matrix;
    let size = matrix.size();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Att \\ Def")];
    header.extend((0..size).map(|c| Cell::new(format!("D Lost {}", matrix.label(c)))));
    header.push(Cell::new("Total"));
    table.set_header(header);

    let row_sums = matrix.row_sums();
    for (r, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(format!("A Lost {}", matrix.label(r)))];
        cells.extend(row.iter().map(|&count| {
            Cell::new(format!("{} ({count})", pct(matrix.percent(count))))
                .set_alignment(CellAlignment::Right)
        }));
        cells.push(Cell::new(pct(matrix.percent(row_sums[r]))).set_alignment(CellAlignment::Right));
        table.add_row(cells);
    }

    let mut footer = vec![Cell::new("Total")];
    footer.extend(
        matrix
            .col_sums()
            .into_iter()
            .map(|sum| Cell::new(pct(matrix.percent(sum))).set_alignment(CellAlignment::Right)),
    );
    footer.push(Cell::new("100%").set_alignment(CellAlignment::Right));
    table.add_row(footer);

    table
}
