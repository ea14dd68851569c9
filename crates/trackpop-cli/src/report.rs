//! Text rendering of the popularity test result.
//!
//! The test itself is a pure computation; every line of narration lives
//! here so the decision logic stays independently testable.

use std::fmt::Write as _;

use trackpop_analysis::popularity_test::{Decision, PopularityTestResult};
use trackpop_stats::{histogram::Histogram, levene::LeveneTest};

const SECTION_SEPARATOR: &str = "\n---\n";
const NULL_HYPOTHESIS: &str = "there is no significant difference between the mean popularity \
                               of explicit tracks and non-explicit tracks";

/// Renders the full test report: significance level, distribution check,
/// class counts, variance comparison, test statistics, and the decision.
#[must_use]
pub fn render_test_report(
    result: &PopularityTestResult,
    variance_check: Option<&LeveneTest>,
    popularity_histogram: &Histogram,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Significance level:");
    let _ = writeln!(out, "  alpha = {}", result.alpha);
    out.push_str(SECTION_SEPARATOR);

    let _ = writeln!(out, "Popularity distribution:");
    out.push_str(&render_histogram(popularity_histogram));
    out.push_str(SECTION_SEPARATOR);

    let _ = writeln!(out, "Observations per class:");
    let _ = writeln!(out, "  explicit:     {}", result.explicit.len);
    let _ = writeln!(out, "  non-explicit: {}", result.non_explicit.len);
    out.push_str(SECTION_SEPARATOR);

    let _ = writeln!(out, "Sample variances:");
    let _ = writeln!(out, "  explicit:     {:.4}", result.explicit.variance);
    let _ = writeln!(out, "  non-explicit: {:.4}", result.non_explicit.variance);
    match variance_check {
        Some(levene) => {
            let _ = writeln!(
                out,
                "  Levene W = {:.4}, p = {:.4} (equality of variances; pooled estimator is \
                 used either way)",
                levene.w_statistic, levene.p_value
            );
        }
        None => {
            let _ = writeln!(out, "  Levene test not defined for these samples");
        }
    }
    out.push_str(SECTION_SEPARATOR);

    let _ = writeln!(out, "Test statistic and one-tailed probability:");
    let _ = writeln!(out, "  t = {:.6}", result.t_statistic);
    let _ = writeln!(out, "  df = {}", result.degrees_of_freedom);
    let _ = writeln!(out, "  p/2 = {:.6}", result.p_one_tailed);
    out.push_str(SECTION_SEPARATOR);

    match result.decision {
        Decision::Reject => {
            let _ = writeln!(out, "We reject the hypothesis that {NULL_HYPOTHESIS}.");
        }
        Decision::FailToReject => {
            let _ = writeln!(out, "We fail to reject the null hypothesis.");
        }
    }
    out.push_str(SECTION_SEPARATOR);

    let _ = writeln!(
        out,
        "Mean popularity of non-explicit tracks: {:.4}",
        result.non_explicit.mean
    );
    let _ = writeln!(
        out,
        "Mean popularity of explicit tracks:     {:.4}",
        result.explicit.mean
    );

    out
}

/// Renders a histogram as right-aligned ranges with `#` bars.
#[must_use]
pub fn render_histogram(histogram: &Histogram) -> String {
    const MAX_BAR_WIDTH: u64 = 50;

    let mut out = String::new();
    let max_count = histogram
        .bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(1)
        .max(1);
    for bin in &histogram.bins {
        let bar_width = usize::try_from(bin.count * MAX_BAR_WIDTH / max_count).unwrap_or(0);
        let label = format!("{:7.1} .. {:7.1}", bin.range.start, bin.range.end);
        let _ = writeln!(out, "  {label} | {:<5} {}", bin.count, "#".repeat(bar_width));
    }
    out
}
