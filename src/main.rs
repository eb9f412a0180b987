mod cli;
mod config;
mod explore;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::cli::{Cli, Commands, ExportArgs, GeneArgs, OverviewArgs, PlotsArgs, SearchArgs};
use crate::explore::Explorer;
use crate::explore::details::{SELECT_PROMPT, Selection};
use crate::report::json::{write_chart_json, write_experiment_charts};
use crate::report::text::{render_gene_card, render_gene_view, render_search_options};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let paths = cli.data.paths();
    tracing::debug!(?paths, "resolved data paths");

    let explorer = Explorer::open(paths);
    match cli.command {
        Commands::Search(args) => run_search(&explorer, &args),
        Commands::Overview(args) => run_overview(&explorer, &args),
        Commands::Gene(args) => run_gene(&explorer, &args),
        Commands::Plots(args) => run_plots(&explorer, &args),
        Commands::Export(args) => run_export(&explorer, &args),
    }
}

fn run_search(explorer: &Explorer, args: &SearchArgs) -> Result<()> {
    let options = explorer.search(args.query.as_deref());
    print!("{}", render_search_options(&options));
    Ok(())
}

fn run_overview(explorer: &Explorer, args: &OverviewArgs) -> Result<()> {
    let chart = match &args.highlight {
        Some(gene) => explorer.highlight(gene).chart,
        None => explorer.overview(),
    };
    write_chart_json(&chart, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    tracing::info!(
        path = %args.out.display(),
        traces = ?chart.trace_names(),
        "wrote overview chart"
    );
    Ok(())
}

fn selection_from(args: &GeneArgs) -> Result<Selection> {
    match (&args.id, args.row) {
        (Some(gene), _) => Ok(Selection::Gene(gene.clone())),
        (None, Some(row)) => Ok(Selection::Row(row)),
        (None, None) => bail!("either --id or --row is required"),
    }
}

fn run_gene(explorer: &Explorer, args: &GeneArgs) -> Result<()> {
    let selection = selection_from(args)?;
    let Some(card) = explorer.card(&selection) else {
        println!("{SELECT_PROMPT}");
        return Ok(());
    };
    print!("{}", render_gene_card(&card));
    println!();

    let view = explorer
        .gene_view(&card.gene)
        .with_context(|| format!("failed to look up fitness details for {}", card.gene))?;
    print!("{}", render_gene_view(&view));
    Ok(())
}

fn run_plots(explorer: &Explorer, args: &PlotsArgs) -> Result<()> {
    let experiment = match &args.experiment {
        Some(experiment) => Some(experiment.clone()),
        None => explorer
            .gene_view(&args.gene)
            .with_context(|| format!("failed to look up fitness details for {}", args.gene))?
            .selected_experiment,
    };

    let view = explorer.experiment_view(experiment.as_deref(), Some(&args.gene));
    println!("{}", view.message);

    let written = write_experiment_charts(&view.plots, &args.out)
        .with_context(|| format!("failed to write charts to {}", args.out.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_export(explorer: &Explorer, args: &ExportArgs) -> Result<()> {
    explorer
        .export(&args.out, args.format)
        .with_context(|| format!("failed to export summary to {}", args.out.display()))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
