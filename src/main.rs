use anyhow::{Context, Result};
use clap::Parser;

use sismo_trend::cli::Cli;
use sismo_trend::data::loader::read_catalog;
use sismo_trend::pipeline;
use sismo_trend::regression::RegressionModel;
use sismo_trend::report::Report;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let content = read_catalog(&cli.catalog)?;
    let summary = pipeline::summarize(&content)
        .with_context(|| format!("loading {}", cli.catalog.display()))?;
    summary.log_warnings();

    // Aggregates are printed even when no line can be fitted.
    let model = RegressionModel::fit(&summary.series);
    print!(
        "{}",
        Report {
            summary: &summary,
            model: model.as_ref().ok(),
        }
    );
    model.context("fitting yearly trend")?;

    Ok(())
}
