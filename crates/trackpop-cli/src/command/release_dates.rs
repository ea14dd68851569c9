use std::{fmt, path::PathBuf};

use anyhow::Context;
use trackpop_analysis::{
    style::ChartSpec,
    summary::{GroupMean, ReleaseDateSummary},
};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReleaseDatesArg {
    /// Path to the tracks JSON file
    pub tracks: PathBuf,
    /// Write the chart spec (style + data) as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReleaseDatesArg) -> anyhow::Result<()> {
    let collection = util::read_tracks_file(&arg.tracks)?;
    let summary = ReleaseDateSummary::from_tracks(&collection.tracks)
        .context("dataset has no tracks to group")?;

    println!("Popularity by release date");
    println!(
        "  overall mean popularity: {:.2}",
        summary.overall_mean_popularity
    );

    print_group_table("release_year", summary.by_year.iter());
    print_group_table("release_month", summary.by_month.iter());
    print_group_table("release_day", summary.by_day.iter());

    if arg.output.is_some() {
        util::save_json(&ChartSpec::new(summary), arg.output.as_deref())?;
    }

    Ok(())
}

fn print_group_table<'a, K, I>(title: &str, groups: I)
where
    K: fmt::Display + 'a,
    I: Iterator<Item = (&'a K, &'a GroupMean)>,
{
    println!();
    println!("  {title}");
    println!("  {:<8} {:>7} {:>17}", "value", "tracks", "mean popularity");
    for (key, group) in groups {
        println!(
            "  {key:<8} {:>7} {:>17.2}",
            group.count, group.mean_popularity
        );
    }
}
