use clap::{Parser, Subcommand};

use self::{
    correlate::CorrelateArg, danceability::DanceabilityArg, explicit_test::ExplicitTestArg,
    generate_tracks::GenerateTracksArg, release_dates::ReleaseDatesArg,
};

mod correlate;
mod danceability;
mod generate_tracks;
mod release_dates;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a synthetic track dataset
    GenerateTracks(#[clap(flatten)] GenerateTracksArg),
    /// Test whether explicit and non-explicit tracks differ in mean popularity
    ExplicitTest(#[clap(flatten)] ExplicitTestArg),
    /// Summarize popularity across danceability bins
    Danceability(#[clap(flatten)] DanceabilityArg),
    /// Summarize popularity by release year, month, and day
    ReleaseDates(#[clap(flatten)] ReleaseDatesArg),
    /// Compute the feature correlation matrix
    Correlate(#[clap(flatten)] CorrelateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::GenerateTracks(arg) => generate_tracks::run(&arg)?,
        Mode::ExplicitTest(arg) => explicit_test::run(&arg)?,
        Mode::Danceability(arg) => danceability::run(&arg)?,
        Mode::ReleaseDates(arg) => release_dates::run(&arg)?,
        Mode::Correlate(arg) => correlate::run(&arg)?,
    }
    Ok(())
}
