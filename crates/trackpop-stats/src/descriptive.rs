/// Descriptive statistics summarizing a dataset.
///
/// Contains the common measures of central tendency and dispersion for a
/// dataset of `f64` values. The variance is the *sample* variance
/// (denominator `n - 1`); a single-observation dataset reports a variance
/// of `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of observations.
    pub len: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median; the midpoint average for even-length datasets.
    pub median: f64,
    /// The sample variance of the dataset.
    pub variance: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are collected and sorted internally before computing
    /// statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use trackpop_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when you already have sorted data to avoid sorting twice.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let len = sorted_values.len();
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let mean = sorted_values.iter().sum::<f64>() / len as f64;
        let median = median_sorted(sorted_values)?;
        let variance = sample_variance_with_mean(sorted_values, mean).unwrap_or(0.0);
        let std_dev = variance.sqrt();

        Some(Self {
            len,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

/// Arithmetic mean of a dataset, or `None` if it is empty.
///
/// # Examples
///
/// ```
/// # use trackpop_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (denominator `n - 1`), or `None` for fewer than two values.
///
/// # Examples
///
/// ```
/// # use trackpop_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[80.0, 82.0]), Some(2.0));
/// assert_eq!(sample_variance(&[42.0]), None);
/// ```
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    sample_variance_with_mean(values, mean(values)?)
}

#[expect(clippy::cast_precision_loss)]
fn sample_variance_with_mean(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Median of pre-sorted values; even-length datasets average the two
/// middle observations.
fn median_sorted(sorted_values: &[f64]) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        Some((sorted_values[mid - 1] + sorted_values[mid]) / 2.0)
    } else {
        Some(sorted_values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.len, 1);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_even_length_median() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_sample_variance_uses_n_minus_one() {
        // Squared deviations from the mean (3.0) sum to 10; 10 / 4 = 2.5
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.variance, 2.5);
        assert!((stats.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted_internally() {
        let stats = DescriptiveStats::new([9.0, 1.0, 5.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_constant_dataset_has_zero_spread() {
        let stats = DescriptiveStats::new([7.0; 10]).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.min, stats.max);
    }
}
