//! Equal-frequency quantile binning.
//!
//! Quantile bins divide a dataset into groups holding roughly the same
//! number of observations, which keeps per-bin statistics stable on
//! skewed distributions where fixed-width bins would leave some bins
//! nearly empty. Bin edges are the linearly interpolated quantiles of the
//! data; assignment follows the `(lo, hi]` convention, so a value equal
//! to an edge falls into the lower bin.
//!
//! Heavily tied data can collapse adjacent edges onto the same value; the
//! affected middle bins are then empty rather than an error.

/// Equal-frequency bin edges computed from a dataset.
///
/// # Examples
///
/// ```
/// use trackpop_stats::binning::QuantileBins;
///
/// let values: Vec<f64> = (1..=9).map(f64::from).collect();
/// let bins = QuantileBins::new(&values, 3).unwrap();
/// assert_eq!(bins.num_bins(), 3);
///
/// let counts = values.iter().fold([0usize; 3], |mut acc, v| {
///     acc[bins.bin_index(*v)] += 1;
///     acc
/// });
/// assert_eq!(counts, [3, 3, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBins {
    /// Interior cut points, one fewer than the number of bins.
    edges: Vec<f64>,
}

impl QuantileBins {
    /// Computes bin edges from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(QuantileBins)` - if `values` is non-empty and `num_bins >= 1`
    /// * `None` - otherwise
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Option<Self> {
        if values.is_empty() || num_bins == 0 {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        #[expect(clippy::cast_precision_loss)]
        let edges = (1..num_bins)
            .map(|i| interpolated_quantile(&sorted, i as f64 / num_bins as f64))
            .collect();
        Some(Self { edges })
    }

    /// The number of bins, including any collapsed (empty) ones.
    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.edges.len() + 1
    }

    /// The interior cut points between bins, in ascending order.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// The bin a value falls into, following the `(lo, hi]` convention.
    ///
    /// Values below the first edge map to bin 0 and values above the last
    /// edge to the last bin, so out-of-range values never panic.
    #[must_use]
    pub fn bin_index(&self, value: f64) -> usize {
        self.edges.iter().filter(|edge| value > **edge).count()
    }
}

/// Linearly interpolated quantile of pre-sorted values, `q` in `[0, 1]`.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolated_quantile(sorted_values: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted_values.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted_values[below] + fraction * (sorted_values[above] - sorted_values[below])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_or_zero_bins() {
        assert!(QuantileBins::new(&[], 3).is_none());
        assert!(QuantileBins::new(&[1.0], 0).is_none());
    }

    #[test]
    fn test_single_bin_takes_everything() {
        let bins = QuantileBins::new(&[1.0, 5.0, 9.0], 1).unwrap();
        assert_eq!(bins.num_bins(), 1);
        assert_eq!(bins.bin_index(-100.0), 0);
        assert_eq!(bins.bin_index(100.0), 0);
    }

    #[test]
    fn test_terciles_split_evenly() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let bins = QuantileBins::new(&values, 3).unwrap();
        let mut counts = [0usize; 3];
        for v in &values {
            counts[bins.bin_index(*v)] += 1;
        }
        assert_eq!(counts, [3, 3, 3]);
    }

    #[test]
    fn test_edges_are_interpolated_quantiles() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let bins = QuantileBins::new(&values, 3).unwrap();
        let edges = bins.edges();
        assert_eq!(edges.len(), 2);
        assert!((edges[0] - 11.0 / 3.0).abs() < 1e-12);
        assert!((edges[1] - 19.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_value_falls_into_lower_bin() {
        // Edges for 1..=5 with 2 bins: the median, 3.0
        let values: Vec<f64> = (1..=5).map(f64::from).collect();
        let bins = QuantileBins::new(&values, 2).unwrap();
        assert_eq!(bins.bin_index(3.0), 0);
        assert_eq!(bins.bin_index(3.0001), 1);
    }

    #[test]
    fn test_unsorted_input() {
        let values = [9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0];
        let bins = QuantileBins::new(&values, 3).unwrap();
        assert_eq!(bins.bin_index(1.0), 0);
        assert_eq!(bins.bin_index(9.0), 2);
    }

    #[test]
    fn test_tied_data_collapses_bins() {
        // Almost all mass on one value: both edges coincide on it
        let mut values = vec![5.0; 20];
        values.push(9.0);
        let bins = QuantileBins::new(&values, 3).unwrap();
        assert_eq!(bins.bin_index(5.0), 0);
        // The middle bin is unreachable; the outlier lands in the last bin
        assert_eq!(bins.bin_index(9.0), 2);
    }
}
