//! Statistical utilities for the trackpop project.
//!
//! This crate provides the numeric building blocks used by the track
//! analysis layer:
//!
//! - **Descriptive statistics**: mean, median, sample variance, standard deviation
//! - **Special functions**: log-gamma, regularized incomplete beta, Student's t and F CDFs
//! - **Hypothesis tests**: pooled two-sample t-test, Levene's variance-equality test
//! - **Quantile binning**: equal-frequency bins for skew-tolerant grouping
//! - **Correlation**: Pearson correlation coefficient
//! - **Histograms**: equal-width frequency distributions
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`special`]: Special functions backing the distribution CDFs
//! - [`ttest`]: Independent two-sample t-test with pooled variance
//! - [`levene`]: Levene's test for equality of variances
//! - [`binning`]: Equal-frequency quantile binning
//! - [`correlation`]: Pearson correlation
//! - [`histogram`]: Histogram construction
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use trackpop_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Comparing two sample means
//!
//! ```
//! use trackpop_stats::ttest::pooled_t_test;
//!
//! let a = [80.0, 82.0];
//! let b = [40.0, 42.0];
//! let test = pooled_t_test(&a, &b).unwrap();
//! assert!(test.t_statistic > 0.0);
//! assert!(test.p_two_tailed < 0.01);
//! ```
//!
//! ## Binning values into equal-frequency groups
//!
//! ```
//! use trackpop_stats::binning::QuantileBins;
//!
//! let values: Vec<f64> = (1..=9).map(f64::from).collect();
//! let bins = QuantileBins::new(&values, 3).unwrap();
//! assert_eq!(bins.bin_index(2.0), 0);
//! assert_eq!(bins.bin_index(5.0), 1);
//! assert_eq!(bins.bin_index(9.0), 2);
//! ```

pub mod binning;
pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod levene;
pub mod special;
pub mod ttest;
