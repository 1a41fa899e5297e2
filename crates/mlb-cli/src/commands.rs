use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use mlb_cli::output::write_outputs;
use mlb_cli::pipeline::{PipelineInputs, run_pipeline};
use mlb_cli::types::RunResult;
use mlb_model::{EfficiencyOptions, MODERN_ROSTER, PipelineOptions, TeamLookup};

use crate::cli::RunArgs;
use crate::summary::{apply_table_style, color_swatch, dim_cell, header_cell};

pub fn run_roster() -> Result<()> {
    let lookup = TeamLookup::modern();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Team"),
        header_cell("Name"),
        header_cell("Color"),
    ]);
    apply_table_style(&mut table);
    for team in MODERN_ROSTER {
        let name = lookup
            .full_name(team)
            .map_or_else(|| dim_cell("-"), Cell::new);
        let color = lookup
            .color(team)
            .map_or_else(|| dim_cell("-"), color_swatch);
        table.add_row(vec![Cell::new(team), name, color]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_trends(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", output_dir = %args.output_dir.display());
    let _run_guard = run_span.enter();

    let inputs = PipelineInputs {
        batting: args.batting.clone(),
        teams: args.teams.clone(),
    };
    let options = PipelineOptions::default()
        .with_efficiency(EfficiencyOptions::default().with_min_year(args.min_year));
    let lookup = TeamLookup::modern();

    let pipeline = run_pipeline(&inputs, &options, &lookup)?;

    let outputs = if args.dry_run {
        info!("dry run: no files written");
        None
    } else {
        Some(info_span!("output").in_scope(|| write_outputs(&args.output_dir, &pipeline))?)
    };

    Ok(RunResult {
        output_dir: args.output_dir.clone(),
        pipeline,
        outputs,
        run_date: Local::now(),
    })
}
