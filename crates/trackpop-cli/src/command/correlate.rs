use std::path::PathBuf;

use trackpop_analysis::{style::ChartSpec, summary::CorrelationSummary};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorrelateArg {
    /// Path to the tracks JSON file
    pub tracks: PathBuf,
    /// Write the chart spec (style + data) as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CorrelateArg) -> anyhow::Result<()> {
    let collection = util::read_tracks_file(&arg.tracks)?;
    let summary = CorrelationSummary::from_tracks(&collection.tracks);

    println!("Feature correlation matrix (Pearson)");
    println!();

    let width = summary
        .feature_ids
        .iter()
        .map(|id| id.len())
        .max()
        .unwrap_or(0)
        .max(7);

    // Header row
    print!("  {:<width$}", "");
    for id in &summary.feature_ids {
        print!(" {id:>width$}");
    }
    println!();

    for (id, row) in summary.feature_ids.iter().zip(&summary.matrix) {
        print!("  {id:<width$}");
        for cell in row {
            match cell {
                Some(r) => print!(" {r:>width$.3}"),
                None => print!(" {:>width$}", "N/A"),
            }
        }
        println!();
    }

    if arg.output.is_some() {
        util::save_json(&ChartSpec::new(summary), arg.output.as_deref())?;
    }

    Ok(())
}
