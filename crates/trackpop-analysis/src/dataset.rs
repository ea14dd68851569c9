//! Track dataset model
//!
//! The dataset is a flat, read-only collection of track records supplied
//! by an external ingestion step. Every analysis in this crate consumes
//! it as a slice and recomputes what it needs per invocation; nothing
//! here is mutated or persisted.
//!
//! # Serialization
//!
//! All types implement `serde` traits for JSON serialization:
//!
//! ```json
//! {
//!   "total_tracks": 2000,
//!   "tracks": [
//!     {
//!       "explicit": true,
//!       "popularity": 67.0,
//!       "danceability": 0.71,
//!       "release_year": 2011,
//!       "release_month": 6,
//!       "release_day": 17
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A collection of track records with summary metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackCollection {
    /// Total number of tracks in the collection.
    pub total_tracks: usize,
    /// The track records themselves.
    pub tracks: Vec<Track>,
}

/// A single track record.
///
/// Popularity is a numeric score, typically in `0..=100` but not
/// enforced; danceability is typically in `0..=1`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Track {
    /// Whether the track is flagged as containing explicit content.
    pub explicit: bool,
    /// Popularity score of the track.
    pub popularity: f64,
    /// Danceability rating of the track.
    pub danceability: f64,
    /// Year the track was released.
    pub release_year: i32,
    /// Month the track was released (1-12).
    pub release_month: u32,
    /// Day of month the track was released (1-31).
    pub release_day: u32,
}

impl Track {
    /// Builds a track with the given explicit flag and popularity and
    /// neutral values for the remaining fields. Convenient for tests and
    /// examples that only exercise the popularity analyses.
    #[must_use]
    pub fn with_popularity(explicit: bool, popularity: f64) -> Self {
        Self {
            explicit,
            popularity,
            danceability: 0.5,
            release_year: 2000,
            release_month: 1,
            release_day: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let collection = TrackCollection {
            total_tracks: 1,
            tracks: vec![Track {
                explicit: true,
                popularity: 67.0,
                danceability: 0.71,
                release_year: 2011,
                release_month: 6,
                release_day: 17,
            }],
        };
        let json = serde_json::to_string(&collection).unwrap();
        let parsed: TrackCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_tracks, 1);
        assert_eq!(parsed.tracks, collection.tracks);
    }
}
