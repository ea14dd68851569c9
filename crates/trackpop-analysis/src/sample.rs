//! Popularity sample extraction from track data.

use crate::dataset::Track;

/// Popularity values partitioned by the explicit-content flag.
///
/// Derived from the dataset on each call and discarded afterwards; the
/// source ordering is preserved within each class.
///
/// # Examples
///
/// ```
/// use trackpop_analysis::{dataset::Track, sample::PartitionedSamples};
///
/// let tracks = vec![
///     Track::with_popularity(true, 80.0),
///     Track::with_popularity(false, 40.0),
///     Track::with_popularity(true, 82.0),
/// ];
/// let samples = PartitionedSamples::from_tracks(&tracks);
/// assert_eq!(samples.explicit, vec![80.0, 82.0]);
/// assert_eq!(samples.non_explicit, vec![40.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedSamples {
    /// Popularity of tracks flagged explicit.
    pub explicit: Vec<f64>,
    /// Popularity of tracks not flagged explicit.
    pub non_explicit: Vec<f64>,
}

impl PartitionedSamples {
    /// Splits a dataset's popularity values by the explicit flag.
    #[must_use]
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let (explicit, non_explicit) = tracks
            .iter()
            .partition::<Vec<_>, _>(|track| track.explicit);
        Self {
            explicit: explicit.into_iter().map(|t| t.popularity).collect(),
            non_explicit: non_explicit.into_iter().map(|t| t.popularity).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let samples = PartitionedSamples::from_tracks(&[]);
        assert!(samples.explicit.is_empty());
        assert!(samples.non_explicit.is_empty());
    }

    #[test]
    fn test_single_class_dataset() {
        let tracks = vec![
            Track::with_popularity(true, 10.0),
            Track::with_popularity(true, 20.0),
        ];
        let samples = PartitionedSamples::from_tracks(&tracks);
        assert_eq!(samples.explicit.len(), 2);
        assert!(samples.non_explicit.is_empty());
    }

    #[test]
    fn test_order_is_preserved_within_classes() {
        let tracks = vec![
            Track::with_popularity(false, 3.0),
            Track::with_popularity(true, 1.0),
            Track::with_popularity(false, 2.0),
            Track::with_popularity(true, 4.0),
        ];
        let samples = PartitionedSamples::from_tracks(&tracks);
        assert_eq!(samples.explicit, vec![1.0, 4.0]);
        assert_eq!(samples.non_explicit, vec![3.0, 2.0]);
    }
}
