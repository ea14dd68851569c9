//! Pre-aggregated summaries for the charting layer.
//!
//! The charts themselves are drawn by an external collaborator; this
//! module computes the numbers a chart needs and nothing else. Each
//! summary answers one of the dataset's standing questions:
//!
//! - [`ExplicitPopularitySummary`]: does explicitness correlate with
//!   popularity? (per-class distribution of popularity)
//! - [`DanceabilitySummary`]: does mean popularity differ across
//!   danceability bins? (equal-frequency terciles)
//! - [`ReleaseDateSummary`]: does release year, month, or day matter?
//!   (group means against the overall average)
//! - [`CorrelationSummary`]: which features correlate linearly?
//!   (Pearson matrix, popularity first)
//!
//! Pair a summary with a [`ChartStyle`](crate::style::ChartStyle) via
//! [`ChartSpec`](crate::style::ChartSpec) when handing it to a renderer.

use std::collections::BTreeMap;

use serde::Serialize;
use trackpop_stats::{binning::QuantileBins, correlation, descriptive::DescriptiveStats};

use crate::{
    dataset::Track,
    feature::{TrackFeature, all_track_features},
    sample::PartitionedSamples,
};

/// Labels for the danceability terciles, lowest first.
pub const DANCEABILITY_BIN_LABELS: [&str; 3] = ["low", "medium", "high"];

/// Serializable descriptive summary of one value series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueSummary {
    pub len: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl ValueSummary {
    /// Summarizes a series, or `None` if it is empty.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::new(values.iter().copied())?;
        Some(Self {
            len: stats.len,
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
        })
    }
}

/// Per-class popularity distributions for the explicitness comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ExplicitPopularitySummary {
    /// Popularity distribution of explicit tracks.
    pub explicit: ValueSummary,
    /// Popularity distribution of non-explicit tracks.
    pub non_explicit: ValueSummary,
}

impl ExplicitPopularitySummary {
    /// Builds the per-class summary, or `None` when either class is
    /// empty (a one-class chart has nothing to compare).
    #[must_use]
    pub fn from_tracks(tracks: &[Track]) -> Option<Self> {
        let samples = PartitionedSamples::from_tracks(tracks);
        Some(Self {
            explicit: ValueSummary::from_values(&samples.explicit)?,
            non_explicit: ValueSummary::from_values(&samples.non_explicit)?,
        })
    }
}

/// One equal-frequency danceability bin with its mean popularity.
#[derive(Debug, Clone, Serialize)]
pub struct DanceabilityBin {
    /// Bin label, one of [`DANCEABILITY_BIN_LABELS`].
    pub label: &'static str,
    /// Number of tracks in the bin.
    pub count: usize,
    /// Mean popularity of the bin, or `None` for a collapsed empty bin.
    pub mean_popularity: Option<f64>,
}

/// Popularity across danceability terciles, with the overall mean as the
/// chart's reference line.
#[derive(Debug, Clone, Serialize)]
pub struct DanceabilitySummary {
    /// Mean popularity over the whole dataset.
    pub overall_mean_popularity: f64,
    /// The interior danceability cut points between the bins.
    pub bin_edges: Vec<f64>,
    /// The bins, lowest danceability first.
    pub bins: Vec<DanceabilityBin>,
}

impl DanceabilitySummary {
    /// Bins the dataset by danceability and averages popularity per bin.
    ///
    /// Returns `None` for an empty dataset.
    #[must_use]
    pub fn from_tracks(tracks: &[Track]) -> Option<Self> {
        let danceability: Vec<f64> = tracks.iter().map(|t| t.danceability).collect();
        let bins = QuantileBins::new(&danceability, DANCEABILITY_BIN_LABELS.len())?;
        let overall_mean_popularity =
            descriptive_mean(tracks.iter().map(|t| t.popularity))?;

        let mut counts = vec![0usize; bins.num_bins()];
        let mut popularity_sums = vec![0.0f64; bins.num_bins()];
        for track in tracks {
            let index = bins.bin_index(track.danceability);
            counts[index] += 1;
            popularity_sums[index] += track.popularity;
        }

        #[expect(clippy::cast_precision_loss)]
        let bins_out = DANCEABILITY_BIN_LABELS
            .iter()
            .zip(counts.iter().zip(&popularity_sums))
            .map(|(label, (&count, &sum))| DanceabilityBin {
                label,
                count,
                mean_popularity: (count > 0).then(|| sum / count as f64),
            })
            .collect();

        Some(Self {
            overall_mean_popularity,
            bin_edges: bins.edges().to_vec(),
            bins: bins_out,
        })
    }
}

/// Count and mean popularity for one group of tracks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    /// Number of tracks in the group.
    pub count: usize,
    /// Mean popularity of the group.
    pub mean_popularity: f64,
}

/// Mean popularity grouped by each release-date component.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseDateSummary {
    /// Mean popularity over the whole dataset.
    pub overall_mean_popularity: f64,
    /// Group means keyed by release year.
    pub by_year: BTreeMap<i32, GroupMean>,
    /// Group means keyed by release month (1-12).
    pub by_month: BTreeMap<u32, GroupMean>,
    /// Group means keyed by release day of month (1-31).
    pub by_day: BTreeMap<u32, GroupMean>,
}

impl ReleaseDateSummary {
    /// Groups the dataset by year, month, and day of release.
    ///
    /// Returns `None` for an empty dataset.
    #[must_use]
    pub fn from_tracks(tracks: &[Track]) -> Option<Self> {
        let overall_mean_popularity =
            descriptive_mean(tracks.iter().map(|t| t.popularity))?;
        Some(Self {
            overall_mean_popularity,
            by_year: mean_popularity_by_group(tracks, |t| t.release_year),
            by_month: mean_popularity_by_group(tracks, |t| t.release_month),
            by_day: mean_popularity_by_group(tracks, |t| t.release_day),
        })
    }
}

/// Collects mean popularity grouped by an arbitrary key.
#[expect(clippy::cast_precision_loss)]
fn mean_popularity_by_group<K, F>(tracks: &[Track], mut key: F) -> BTreeMap<K, GroupMean>
where
    K: Ord,
    F: FnMut(&Track) -> K,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for track in tracks {
        groups.entry(key(track)).or_default().push(track.popularity);
    }
    groups
        .into_iter()
        .map(|(k, popularity)| {
            let mean = popularity.iter().sum::<f64>() / popularity.len() as f64;
            (
                k,
                GroupMean {
                    count: popularity.len(),
                    mean_popularity: mean,
                },
            )
        })
        .collect()
}

fn descriptive_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    trackpop_stats::descriptive::mean(&values)
}

/// Pearson correlation matrix over all numeric track features.
///
/// Rows and columns follow `feature_ids`, with popularity first.
/// Cells are `None` where the coefficient is undefined (a constant
/// feature column or fewer than two tracks).
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationSummary {
    /// Feature identifiers, in matrix order.
    pub feature_ids: Vec<String>,
    /// Symmetric correlation matrix; `matrix[i][j]` pairs feature `i`
    /// with feature `j`.
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl CorrelationSummary {
    /// Computes the correlation matrix for a dataset.
    #[must_use]
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let features = all_track_features();
        let columns: Vec<Vec<f64>> = features
            .iter()
            .map(|feature| tracks.iter().map(|t| feature.extract(t)).collect())
            .collect();

        let matrix = columns
            .iter()
            .map(|x| {
                columns
                    .iter()
                    .map(|y| correlation::pearson(x, y))
                    .collect()
            })
            .collect();

        Self {
            feature_ids: features.iter().map(|f| f.id().to_owned()).collect(),
            matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(
        explicit: bool,
        popularity: f64,
        danceability: f64,
        year: i32,
        month: u32,
        day: u32,
    ) -> Track {
        Track {
            explicit,
            popularity,
            danceability,
            release_year: year,
            release_month: month,
            release_day: day,
        }
    }

    #[test]
    fn test_explicit_summary_requires_both_classes() {
        let tracks = vec![Track::with_popularity(true, 50.0)];
        assert!(ExplicitPopularitySummary::from_tracks(&tracks).is_none());
    }

    #[test]
    fn test_explicit_summary_per_class_stats() {
        let tracks = vec![
            Track::with_popularity(true, 80.0),
            Track::with_popularity(true, 82.0),
            Track::with_popularity(false, 40.0),
        ];
        let summary = ExplicitPopularitySummary::from_tracks(&tracks).unwrap();
        assert_eq!(summary.explicit.len, 2);
        assert_eq!(summary.explicit.mean, 81.0);
        assert_eq!(summary.non_explicit.len, 1);
        assert_eq!(summary.non_explicit.mean, 40.0);
    }

    #[test]
    fn test_danceability_bins_cover_dataset() {
        let tracks: Vec<Track> = (1..=9)
            .map(|i| track(false, f64::from(i * 10), f64::from(i) / 10.0, 2000, 1, 1))
            .collect();
        let summary = DanceabilitySummary::from_tracks(&tracks).unwrap();
        assert_eq!(summary.bins.len(), 3);
        assert_eq!(summary.bins.iter().map(|b| b.count).sum::<usize>(), 9);
        // Equal frequencies on evenly spread danceability
        for bin in &summary.bins {
            assert_eq!(bin.count, 3);
        }
        // Popularity grows with danceability here, so bin means must too
        let means: Vec<f64> = summary
            .bins
            .iter()
            .map(|b| b.mean_popularity.unwrap())
            .collect();
        assert!(means[0] < means[1] && means[1] < means[2]);
        assert_eq!(summary.overall_mean_popularity, 50.0);
    }

    #[test]
    fn test_danceability_empty_dataset() {
        assert!(DanceabilitySummary::from_tracks(&[]).is_none());
    }

    #[test]
    fn test_release_date_groups() {
        let tracks = vec![
            track(false, 10.0, 0.5, 1999, 1, 5),
            track(false, 30.0, 0.5, 1999, 2, 5),
            track(false, 50.0, 0.5, 2005, 2, 7),
        ];
        let summary = ReleaseDateSummary::from_tracks(&tracks).unwrap();
        assert_eq!(summary.overall_mean_popularity, 30.0);
        assert_eq!(summary.by_year[&1999].count, 2);
        assert_eq!(summary.by_year[&1999].mean_popularity, 20.0);
        assert_eq!(summary.by_year[&2005].mean_popularity, 50.0);
        assert_eq!(summary.by_month[&2].count, 2);
        assert_eq!(summary.by_month[&2].mean_popularity, 40.0);
        assert_eq!(summary.by_day[&5].count, 2);
    }

    #[test]
    fn test_correlation_matrix_shape_and_diagonal() {
        let tracks: Vec<Track> = (0..10)
            .map(|i| {
                track(
                    i % 2 == 0,
                    f64::from(i * 7 % 50),
                    f64::from(i) / 10.0,
                    2000 + i,
                    u32::try_from(i).unwrap() % 12 + 1,
                    u32::try_from(i).unwrap() % 28 + 1,
                )
            })
            .collect();
        let summary = CorrelationSummary::from_tracks(&tracks);
        assert_eq!(summary.feature_ids[0], "popularity");
        let n = summary.feature_ids.len();
        assert_eq!(summary.matrix.len(), n);
        for (i, row) in summary.matrix.iter().enumerate() {
            assert_eq!(row.len(), n);
            let diagonal = row[i].unwrap();
            assert!((diagonal - 1.0).abs() < 1e-12);
            for (j, cell) in row.iter().enumerate() {
                // Symmetric within floating-point error
                let mirrored = summary.matrix[j][i];
                match (cell, mirrored) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-12),
                    (None, None) => {}
                    _ => panic!("asymmetric undefined cells"),
                }
            }
        }
    }

    #[test]
    fn test_correlation_constant_column_is_undefined() {
        // All tracks share the same release year: that column is constant
        let tracks: Vec<Track> = (0..5)
            .map(|i| track(i % 2 == 0, f64::from(i * 10), 0.1 * f64::from(i), 2020, 1, 1))
            .collect();
        let summary = CorrelationSummary::from_tracks(&tracks);
        let year_index = summary
            .feature_ids
            .iter()
            .position(|id| id == "release_year")
            .unwrap();
        assert!(summary.matrix[0][year_index].is_none());
        assert!(summary.matrix[year_index][year_index].is_none());
    }
}
