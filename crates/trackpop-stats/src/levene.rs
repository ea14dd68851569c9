//! Levene's test for equality of variances.
//!
//! Levene's test checks whether several groups share a common population
//! variance by running a one-way analysis of variance on the absolute
//! deviations of each observation from its group mean. A small p-value
//! is evidence that the group variances differ.
//!
//! This is the diagnostic companion to the pooled
//! [t-test](crate::ttest): the pooled estimator is only appropriate when
//! the variances are comparable, and this test quantifies that
//! assumption instead of leaving it to eyeballing the two variances.

use crate::{descriptive, special};

/// Result of Levene's variance-equality test.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveneTest {
    /// The W statistic (an F-distributed ratio under the null).
    pub w_statistic: f64,
    /// Between-groups degrees of freedom, `k - 1`.
    pub df_between: f64,
    /// Within-groups degrees of freedom, `N - k`.
    pub df_within: f64,
    /// Probability of a statistic at least this large under the null
    /// hypothesis of equal variances.
    pub p_value: f64,
}

/// Runs Levene's test (mean-centered) over two or more groups.
///
/// # Returns
///
/// * `Some(LeveneTest)` - when there are at least two non-empty groups,
///   `N - k` is positive, and the within-group deviations are not all
///   identical
/// * `None` - otherwise (including fully degenerate input such as all
///   groups being constant, where the statistic is a 0/0 form)
///
/// # Examples
///
/// ```
/// # use trackpop_stats::levene::levene_test;
/// let narrow = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let wide = [-10.0, 0.0, 10.0, -20.0, 20.0];
/// let test = levene_test(&[&narrow, &wide]).unwrap();
/// assert!(test.w_statistic > 0.0);
/// assert!(test.p_value < 0.05);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn levene_test(groups: &[&[f64]]) -> Option<LeveneTest> {
    let k = groups.len();
    let total: usize = groups.iter().map(|g| g.len()).sum();
    if k < 2 || total <= k || groups.iter().any(|g| g.is_empty()) {
        return None;
    }

    // Absolute deviations of each observation from its group mean.
    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|group| {
            let group_mean = descriptive::mean(group).unwrap_or(0.0);
            group.iter().map(|v| (v - group_mean).abs()).collect()
        })
        .collect();

    let deviation_means: Vec<f64> = deviations
        .iter()
        .map(|z| descriptive::mean(z).unwrap_or(0.0))
        .collect();
    let grand_mean =
        deviations.iter().flatten().sum::<f64>() / total as f64;

    let between: f64 = deviations
        .iter()
        .zip(&deviation_means)
        .map(|(z, z_mean)| z.len() as f64 * (z_mean - grand_mean).powi(2))
        .sum();
    let within: f64 = deviations
        .iter()
        .zip(&deviation_means)
        .map(|(z, z_mean)| z.iter().map(|v| (v - z_mean).powi(2)).sum::<f64>())
        .sum();

    if within == 0.0 {
        return None;
    }

    let df_between = (k - 1) as f64;
    let df_within = (total - k) as f64;
    let w_statistic = (df_within / df_between) * (between / within);
    let p_value = 1.0 - special::f_cdf(w_statistic, df_between, df_within);

    Some(LeveneTest {
        w_statistic,
        df_between,
        df_within,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statistic() {
        // Deviation means 1.2 and 2.4; between 3.6, within 14.0;
        // W = (8 / 1) * (3.6 / 14.0)
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 3.0, 5.0, 7.0, 9.0];
        let test = levene_test(&[&a, &b]).unwrap();
        assert!((test.w_statistic - 2.057_142_857_142_857).abs() < 1e-9);
        assert_eq!(test.df_between, 1.0);
        assert_eq!(test.df_within, 8.0);
        assert!(test.p_value > 0.17 && test.p_value < 0.21);
    }

    #[test]
    fn test_equal_spreads_are_not_flagged() {
        // Same shape shifted by a constant: identical spread
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [101.0, 102.0, 103.0, 104.0, 105.0];
        let test = levene_test(&[&a, &b]).unwrap();
        assert!(test.w_statistic.abs() < 1e-9);
        assert!(test.p_value > 0.99);
    }

    #[test]
    fn test_very_different_spreads_are_flagged() {
        let tight = [10.0, 10.1, 9.9, 10.05, 9.95, 10.02, 9.98];
        let loose = [0.0, 20.0, -10.0, 30.0, 5.0, -15.0, 25.0];
        let test = levene_test(&[&tight, &loose]).unwrap();
        assert!(test.p_value < 0.01);
    }

    #[test]
    fn test_undefined_inputs() {
        let a = [1.0, 2.0];
        let empty: [f64; 0] = [];
        assert!(levene_test(&[&a]).is_none());
        assert!(levene_test(&[&a, &empty]).is_none());
        // All groups constant: every deviation is zero
        let c1 = [5.0, 5.0, 5.0];
        let c2 = [9.0, 9.0, 9.0];
        assert!(levene_test(&[&c1, &c2]).is_none());
    }

    #[test]
    fn test_three_groups() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 3.0, 5.0, 7.0];
        let c = [0.0, 4.0, 8.0, 12.0];
        let test = levene_test(&[&a, &b, &c]).unwrap();
        assert_eq!(test.df_between, 2.0);
        assert_eq!(test.df_within, 9.0);
        assert!(test.p_value > 0.0 && test.p_value < 1.0);
    }
}
