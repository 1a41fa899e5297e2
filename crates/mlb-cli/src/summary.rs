use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mlb_cli::types::RunResult;
use mlb_common::format_optional;
use mlb_model::Quadrant;

/// Digits of an input's SHA-256 shown in the terminal.
const DIGEST_PREFIX: usize = 12;

pub fn print_summary(result: &RunResult) {
    let pipeline = &result.pipeline;
    println!("Run date: {}", result.run_date.format("%Y-%m-%d %H:%M"));
    match &result.outputs {
        Some(_) => println!("Output: {}", result.output_dir.display()),
        None => println!("Output: dry run, nothing written"),
    }

    let mut inputs = Table::new();
    inputs.set_header(vec![header_cell("Input"), header_cell("SHA-256")]);
    apply_table_style(&mut inputs);
    for fingerprint in &pipeline.inputs {
        let digest = fingerprint
            .sha256
            .get(..DIGEST_PREFIX)
            .unwrap_or(&fingerprint.sha256);
        inputs.add_row(vec![
            Cell::new(fingerprint.path.display()),
            dim_cell(format!("{digest}…")),
        ]);
    }
    println!("{inputs}");

    let counts = &pipeline.counts;
    let mut stages = Table::new();
    stages.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut stages);
    align_column(&mut stages, 1, CellAlignment::Right);
    for (label, rows) in [
        ("Batting records", counts.batting_rows),
        ("Team seasons", counts.team_rows),
        ("Merged records", counts.merged_rows),
        ("Yearly summary", counts.yearly_rows),
        ("Team efficiency", counts.efficiency_rows),
    ] {
        stages.add_row(vec![stage_cell(label), Cell::new(rows)]);
    }
    stages.add_row(vec![
        dim_cell(format!(
            "Established franchises (>= {} seasons, not applied)",
            pipeline.franchises.min_seasons
        )),
        dim_cell(counts.established_franchises),
    ]);
    println!("{stages}");

    print_quadrant_table(result);

    if !pipeline.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &pipeline.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn print_quadrant_table(result: &RunResult) {
    let quadrant = &result.pipeline.quadrant;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Quadrant"), header_cell("Team seasons")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &quadrant.counts {
        table.add_row(vec![
            quadrant_cell(entry.quadrant),
            count_cell(entry.count, Color::Cyan),
        ]);
    }
    table.add_row(vec![
        dim_cell("Unclassified"),
        count_cell(quadrant.unclassified, Color::Yellow),
    ]);
    println!();
    println!(
        "Quadrants (mean avg RBI/game {}, mean contribution rate {}):",
        format_optional(quadrant.mean_avg_rbi_per_game, 4),
        format_optional(quadrant.mean_rbi_contribution_rate, 4)
    );
    println!("{table}");
}

fn quadrant_cell(quadrant: Quadrant) -> Cell {
    let cell = Cell::new(quadrant.label());
    match quadrant {
        Quadrant::HighRbiHighContribution => cell.fg(Color::Rgb {
            r: 242,
            g: 142,
            b: 43,
        }),
        Quadrant::HighRbiLowContribution => cell.fg(Color::Rgb {
            r: 225,
            g: 87,
            b: 89,
        }),
        Quadrant::LowRbiLowContribution => cell.fg(Color::Rgb {
            r: 89,
            g: 161,
            b: 79,
        }),
        Quadrant::LowRbiHighContribution => cell.fg(Color::Rgb {
            r: 78,
            g: 121,
            b: 167,
        }),
    }
}

fn stage_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

/// A cell showing `#RRGGBB` in its own color.
pub fn color_swatch(hex: &str) -> Cell {
    match parse_hex_color(hex) {
        Some(color) => Cell::new(format!("■ {hex}")).fg(color),
        None => Cell::new(hex),
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_colors() {
        assert_eq!(
            parse_hex_color("#0C2340"),
            Some(Color::Rgb {
                r: 12,
                g: 35,
                b: 64
            })
        );
        assert_eq!(parse_hex_color("0C2340"), None);
        assert_eq!(parse_hex_color("#0C23"), None);
        assert_eq!(parse_hex_color("#GG2340"), None);
    }
}
