use std::path::PathBuf;

use anyhow::Context;
use trackpop_analysis::{style::ChartSpec, summary::DanceabilitySummary};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DanceabilityArg {
    /// Path to the tracks JSON file
    pub tracks: PathBuf,
    /// Write the chart spec (style + data) as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DanceabilityArg) -> anyhow::Result<()> {
    let collection = util::read_tracks_file(&arg.tracks)?;
    let summary = DanceabilitySummary::from_tracks(&collection.tracks)
        .context("dataset has no tracks to bin")?;

    println!("Popularity by danceability bin");
    println!(
        "  overall mean popularity: {:.2}",
        summary.overall_mean_popularity
    );
    println!("  bin edges: {:?}", summary.bin_edges);
    println!();
    println!("  {:<8} {:>7} {:>17}", "bin", "tracks", "mean popularity");
    for bin in &summary.bins {
        match bin.mean_popularity {
            Some(mean) => {
                println!("  {:<8} {:>7} {mean:>17.2}", bin.label, bin.count);
            }
            None => println!("  {:<8} {:>7} {:>17}", bin.label, bin.count, "N/A"),
        }
    }

    if arg.output.is_some() {
        util::save_json(&ChartSpec::new(summary), arg.output.as_deref())?;
    }

    Ok(())
}
