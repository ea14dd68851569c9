//! Exploratory analysis of track popularity
//!
//! This crate provides the domain layer for analyzing a music-track
//! dataset: the dataset model, feature extraction, the explicit-content
//! popularity hypothesis test, and pre-aggregated summaries for an
//! external charting layer.
//!
//! # Overview
//!
//! The analysis system supports two main workflows:
//!
//! ## Hypothesis Testing Workflow
//!
//! Decide whether explicit and non-explicit tracks differ in mean
//! popularity:
//!
//! 1. **Load Track Data** ([`dataset::TrackCollection`]): deserialize the dataset
//! 2. **Partition Samples** ([`sample::PartitionedSamples`]): split popularity by the explicit flag
//! 3. **Evaluate** ([`popularity_test::evaluate`]): pooled two-sample t-test with a
//!    reject / fail-to-reject decision
//!
//! The computation is pure: rendering the result as text is the caller's
//! concern, so the decision logic stays independently testable.
//!
//! ## Chart Summary Workflow
//!
//! Build the pre-aggregated statistics a charting collaborator consumes:
//!
//! 1. **Summarize** ([`summary`]): per-class popularity statistics, danceability
//!    bins, release-date group means, or the feature correlation matrix
//! 2. **Attach Style** ([`style::ChartSpec`]): pair the data with an explicit
//!    [`style::ChartStyle`] configuration value (never process-wide state)
//!
//! # Examples
//!
//! ## Running the popularity difference test
//!
//! ```
//! use trackpop_analysis::dataset::Track;
//! use trackpop_analysis::popularity_test::{self, Decision, DEFAULT_ALPHA};
//!
//! let tracks = vec![
//!     Track::with_popularity(true, 80.0),
//!     Track::with_popularity(true, 82.0),
//!     Track::with_popularity(false, 40.0),
//!     Track::with_popularity(false, 42.0),
//! ];
//!
//! let result = popularity_test::evaluate(&tracks, DEFAULT_ALPHA).unwrap();
//! assert_eq!(result.decision, Decision::Reject);
//! assert_eq!(result.explicit.mean, 81.0);
//! assert_eq!(result.non_explicit.mean, 41.0);
//! ```

pub mod dataset;
pub mod feature;
pub mod sample;
pub mod style;
pub mod summary;
