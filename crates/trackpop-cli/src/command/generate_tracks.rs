use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Normal};
use rand_pcg::Pcg64Mcg;
use trackpop_analysis::dataset::{Track, TrackCollection};

use crate::util;

/// Share of generated tracks flagged explicit.
const EXPLICIT_RATE: f64 = 0.25;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateTracksArg {
    /// Number of tracks to generate
    #[arg(long, default_value_t = 2000)]
    num_tracks: usize,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateTracksArg) -> anyhow::Result<()> {
    let GenerateTracksArg {
        num_tracks,
        seed,
        output,
    } = arg;

    let mut rng = match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(*seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    };

    // Explicit tracks get a modest popularity head start so the
    // hypothesis test has a real signal to find.
    let explicit_popularity = Normal::new(57.0, 13.0)?;
    let clean_popularity = Normal::new(50.0, 13.0)?;
    let danceability = Beta::new(6.0, 4.0)?;

    eprintln!("Generating {num_tracks} tracks...");

    let tracks: Vec<Track> = (0..*num_tracks)
        .map(|_| {
            let explicit = rng.random_bool(EXPLICIT_RATE);
            let popularity: f64 = if explicit {
                explicit_popularity.sample(&mut rng)
            } else {
                clean_popularity.sample(&mut rng)
            };
            Track {
                explicit,
                popularity: popularity.round().clamp(0.0, 100.0),
                danceability: danceability.sample(&mut rng),
                release_year: rng.random_range(1960..=2024),
                release_month: rng.random_range(1..=12),
                release_day: rng.random_range(1..=28),
            }
        })
        .collect();

    print_class_breakdown(&tracks);

    let collection = TrackCollection {
        total_tracks: tracks.len(),
        tracks,
    };
    util::save_json(&collection, output.as_deref())?;

    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn print_class_breakdown(tracks: &[Track]) {
    let explicit_count = tracks.iter().filter(|t| t.explicit).count();
    let clean_count = tracks.len() - explicit_count;
    let mean_of = |flag: bool| {
        let values: Vec<f64> = tracks
            .iter()
            .filter(|t| t.explicit == flag)
            .map(|t| t.popularity)
            .collect();
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    eprintln!(
        "  explicit:     {explicit_count:6} tracks, mean popularity {:.1}",
        mean_of(true)
    );
    eprintln!(
        "  non-explicit: {clean_count:6} tracks, mean popularity {:.1}",
        mean_of(false)
    );
}
