//! Numeric feature sources for track records.
//!
//! These types define how to read each numeric column out of a
//! [`Track`], so that analyses like the correlation matrix can iterate
//! over "all features" without hard-coding field access. Popularity is
//! deliberately first in [`all_track_features`], matching the column
//! ordering the correlation summary presents.

use std::fmt;

use crate::dataset::Track;

/// Every numeric feature, with popularity in the first position.
#[must_use]
pub fn all_track_features() -> Vec<BoxedTrackFeature> {
    vec![
        Box::new(Popularity),
        Box::new(Explicitness),
        Box::new(Danceability),
        Box::new(ReleaseYear),
        Box::new(ReleaseMonth),
        Box::new(ReleaseDay),
    ]
}

/// A numeric column of the track dataset.
pub trait TrackFeature: fmt::Debug + Send + Sync {
    /// Stable machine-readable identifier (snake case).
    #[must_use]
    fn id(&self) -> &str;
    /// Human-readable display name.
    #[must_use]
    fn name(&self) -> &str;
    #[must_use]
    fn clone_boxed(&self) -> BoxedTrackFeature;
    /// Reads this feature's value from a track.
    #[must_use]
    fn extract(&self, track: &Track) -> f64;
}

pub type BoxedTrackFeature = Box<dyn TrackFeature>;

impl Clone for BoxedTrackFeature {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl TrackFeature for BoxedTrackFeature {
    fn id(&self) -> &str {
        self.as_ref().id()
    }

    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn clone_boxed(&self) -> BoxedTrackFeature {
        self.as_ref().clone_boxed()
    }

    fn extract(&self, track: &Track) -> f64 {
        self.as_ref().extract(track)
    }
}

/// Popularity score of the track.
#[derive(Debug, Clone)]
pub struct Popularity;

impl TrackFeature for Popularity {
    fn id(&self) -> &'static str {
        "popularity"
    }
    fn name(&self) -> &'static str {
        "Popularity"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        track.popularity
    }
}

/// The explicit-content flag as an indicator value (1.0 or 0.0), so it
/// participates in the correlation matrix like any numeric column.
#[derive(Debug, Clone)]
pub struct Explicitness;

impl TrackFeature for Explicitness {
    fn id(&self) -> &'static str {
        "explicit"
    }
    fn name(&self) -> &'static str {
        "Explicit"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        if track.explicit { 1.0 } else { 0.0 }
    }
}

/// Danceability rating of the track.
#[derive(Debug, Clone)]
pub struct Danceability;

impl TrackFeature for Danceability {
    fn id(&self) -> &'static str {
        "danceability"
    }
    fn name(&self) -> &'static str {
        "Danceability"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        track.danceability
    }
}

/// Release year of the track.
#[derive(Debug, Clone)]
pub struct ReleaseYear;

impl TrackFeature for ReleaseYear {
    fn id(&self) -> &'static str {
        "release_year"
    }
    fn name(&self) -> &'static str {
        "Release Year"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        f64::from(track.release_year)
    }
}

/// Release month of the track.
#[derive(Debug, Clone)]
pub struct ReleaseMonth;

impl TrackFeature for ReleaseMonth {
    fn id(&self) -> &'static str {
        "release_month"
    }
    fn name(&self) -> &'static str {
        "Release Month"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        f64::from(track.release_month)
    }
}

/// Release day of the track.
#[derive(Debug, Clone)]
pub struct ReleaseDay;

impl TrackFeature for ReleaseDay {
    fn id(&self) -> &'static str {
        "release_day"
    }
    fn name(&self) -> &'static str {
        "Release Day"
    }
    fn clone_boxed(&self) -> BoxedTrackFeature {
        Box::new(self.clone())
    }
    fn extract(&self, track: &Track) -> f64 {
        f64::from(track.release_day)
    }
}
