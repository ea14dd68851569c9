//! Independent two-sample t-test with pooled variance.
//!
//! The pooled form assumes both samples share a common population
//! variance; the pooled estimate is the sum of both samples' squared
//! deviations divided by the combined degrees of freedom `n1 + n2 - 2`.
//! Callers that cannot justify the equal-variance assumption should treat
//! the result together with a variance-equality check
//! (see [`levene`](crate::levene)).

use crate::{descriptive, special};

/// Result of an independent two-sample t-test.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSampleTTest {
    /// The t statistic. Infinite when both samples are constant with
    /// different means; NaN when both are constant with equal means.
    pub t_statistic: f64,
    /// Combined degrees of freedom, `n1 + n2 - 2`.
    pub degrees_of_freedom: f64,
    /// Two-tailed probability of a statistic at least this extreme under
    /// the null hypothesis of equal population means.
    pub p_two_tailed: f64,
}

/// Runs the equal-variance (pooled) independent two-sample t-test.
///
/// # Returns
///
/// * `Some(TwoSampleTTest)` - when both samples are non-empty and the
///   combined degrees of freedom are positive (`n1 + n2 >= 3`)
/// * `None` - otherwise; the test is undefined for such sizes
///
/// A sample of length one is allowed as long as the combined size is
/// sufficient; it contributes zero squared deviation to the pooled
/// estimate. If both samples are constant with equal means the statistic
/// is a 0/0 form and `t_statistic`/`p_two_tailed` are NaN.
///
/// # Examples
///
/// ```
/// # use trackpop_stats::ttest::pooled_t_test;
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 3.0, 4.0, 5.0, 6.0];
/// let test = pooled_t_test(&a, &b).unwrap();
/// assert_eq!(test.degrees_of_freedom, 8.0);
/// assert!((test.t_statistic + 1.0).abs() < 1e-12);
/// assert!((test.p_two_tailed - 0.3466).abs() < 1e-3);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pooled_t_test(sample_a: &[f64], sample_b: &[f64]) -> Option<TwoSampleTTest> {
    let n1 = sample_a.len();
    let n2 = sample_b.len();
    if n1 == 0 || n2 == 0 || n1 + n2 < 3 {
        return None;
    }

    let mean_a = descriptive::mean(sample_a)?;
    let mean_b = descriptive::mean(sample_b)?;
    let sum_sq_a = sum_squared_deviations(sample_a, mean_a);
    let sum_sq_b = sum_squared_deviations(sample_b, mean_b);

    let degrees_of_freedom = (n1 + n2 - 2) as f64;
    let pooled_variance = (sum_sq_a + sum_sq_b) / degrees_of_freedom;
    let standard_error = (pooled_variance * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();

    let t_statistic = (mean_a - mean_b) / standard_error;
    let p_two_tailed = 2.0 * (1.0 - special::student_t_cdf(t_statistic.abs(), degrees_of_freedom));

    Some(TwoSampleTTest {
        t_statistic,
        degrees_of_freedom,
        p_two_tailed,
    })
}

fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statistic_and_p_value() {
        // Means 3 and 4, pooled variance 2.5, standard error 1.0
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let test = pooled_t_test(&a, &b).unwrap();
        assert!((test.t_statistic + 1.0).abs() < 1e-12);
        assert_eq!(test.degrees_of_freedom, 8.0);
        assert!((test.p_two_tailed - 0.3466).abs() < 1e-3);
    }

    #[test]
    fn test_identical_samples_yield_zero_statistic() {
        let a = [50.0, 60.0];
        let b = [50.0, 60.0];
        let test = pooled_t_test(&a, &b).unwrap();
        assert_eq!(test.t_statistic, 0.0);
        assert!((test.p_two_tailed - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clearly_separated_samples() {
        let a = [80.0, 82.0];
        let b = [40.0, 42.0];
        let test = pooled_t_test(&a, &b).unwrap();
        assert!(test.t_statistic > 20.0);
        assert_eq!(test.degrees_of_freedom, 2.0);
        assert!(test.p_two_tailed < 0.01);
    }

    #[test]
    fn test_sign_follows_sample_order() {
        let low = [1.0, 2.0, 3.0];
        let high = [11.0, 12.0, 13.0];
        let forward = pooled_t_test(&low, &high).unwrap();
        let backward = pooled_t_test(&high, &low).unwrap();
        assert!(forward.t_statistic < 0.0);
        assert!((forward.t_statistic + backward.t_statistic).abs() < 1e-12);
        assert!((forward.p_two_tailed - backward.p_two_tailed).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_for_insufficient_sizes() {
        assert!(pooled_t_test(&[], &[1.0, 2.0]).is_none());
        assert!(pooled_t_test(&[1.0, 2.0], &[]).is_none());
        assert!(pooled_t_test(&[1.0], &[2.0]).is_none());
    }

    #[test]
    fn test_single_observation_sample_is_allowed() {
        let test = pooled_t_test(&[80.0], &[40.0, 42.0, 44.0]).unwrap();
        assert_eq!(test.degrees_of_freedom, 2.0);
        assert!(test.t_statistic.is_finite());
    }

    #[test]
    fn test_constant_samples_equal_means_are_nan() {
        let test = pooled_t_test(&[50.0, 50.0], &[50.0, 50.0]).unwrap();
        assert!(test.t_statistic.is_nan());
        assert!(test.p_two_tailed.is_nan());
    }

    #[test]
    fn test_constant_samples_different_means_are_infinite() {
        let test = pooled_t_test(&[80.0, 80.0], &[40.0, 40.0]).unwrap();
        assert_eq!(test.t_statistic, f64::INFINITY);
        assert_eq!(test.p_two_tailed, 0.0);
    }
}
