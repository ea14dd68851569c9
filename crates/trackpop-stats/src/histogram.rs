use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The value range is divided into equal-width bins; the final bin is
/// closed on the right so the maximum value is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start,
    /// exclusive end, except for the final bin which includes its end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// An empty input or `num_bins == 0` produces a histogram with no
    /// bins. A dataset where every value is identical produces a single
    /// zero-width bin holding everything.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trackpop_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    /// let histogram = Histogram::new(values, 4);
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 8);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = sorted_values[0];
        let max = sorted_values[sorted_values.len() - 1];
        if min == max {
            return Self {
                bins: vec![HistogramBin {
                    range: min..max,
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let width = (max - min) / num_bins as f64;
        let mut counts = vec![0u64; num_bins];
        for value in sorted_values {
            let index = (((value - min) / width) as usize).min(num_bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                range: (min + i as f64 * width)..(min + (i + 1) as f64 * width),
                count,
            })
            .collect();
        Self { bins }
    }
}
