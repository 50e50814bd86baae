//! Pearson correlation and simple linear regression.
//!
//! Both operations pair values by index and use only the first
//! `min(x.len(), y.len())` pairs. Mismatched lengths are truncated, not
//! rejected, because the columns come from independent extraction and a
//! record may lack one of the two fields. Callers needing strict pairing
//! should extract both fields from the same records first.
//!
//! Degenerate input never fails: fewer than two pairs or zero variance
//! yields a correlation of `0.0` and a flat regression line.
//!
//! ```
//! use steel_insight::analysis::{linear_regression, pearson_corr};
//!
//! let carbon = [0.2, 0.4, 0.6];
//! let hardness = [30.0, 40.0, 50.0];
//! assert!((pearson_corr(&carbon, &hardness) - 1.0).abs() < 1e-10);
//!
//! let fit = linear_regression(&carbon, &hardness);
//! assert!((fit.slope - 50.0).abs() < 1e-9);
//! assert!((fit.intercept - 20.0).abs() < 1e-9);
//! ```

use crate::profiling::{mean, stdev_sample};
use tracing::debug;
use u_numflow::stats;

/// Truncates both slices to their common length.
fn paired<'a>(x: &'a [f64], y: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let n = x.len().min(y.len());
    (&x[..n], &y[..n])
}

// ── Correlation ───────────────────────────────────────────────────────

/// Pearson product-moment correlation coefficient in `[-1, 1]`.
///
/// r = Σ(x-x̄)(y-ȳ) / ((n-1)·s_x·s_y)
///
/// The cross-product sum is taken term by term so that swapping `x` and `y`
/// gives a bit-identical result.
///
/// Returns `0.0` when fewer than two pairs exist or either side has zero
/// sample standard deviation.
pub fn pearson_corr(x: &[f64], y: &[f64]) -> f64 {
    let (x, y) = paired(x, y);
    let n = x.len();
    if n < 2 {
        return 0.0;
    }
    let sx = stdev_sample(x);
    let sy = stdev_sample(y);
    if sx == 0.0 || sy == 0.0 {
        return 0.0;
    }
    let (xm, ym) = (mean(x), mean(y));
    let num: f64 = x.iter().zip(y).map(|(&a, &b)| (a - xm) * (b - ym)).sum();
    let den = (n - 1) as f64 * (sx * sy);
    (num / den).clamp(-1.0, 1.0)
}

// ── Regression ────────────────────────────────────────────────────────

/// Ordinary least squares fit `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination (squared Pearson r).
    pub r_squared: f64,
    /// Number of (x, y) pairs used.
    pub n: usize,
}

/// Simple linear regression by OLS closed form.
///
/// slope = cov(x, y) / var(x), intercept = ȳ - slope·x̄
///
/// With fewer than two pairs or constant `x` the result is the flat line
/// `slope = 0`, `intercept = ȳ`, `R² = 0`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> RegressionResult {
    let (x, y) = paired(x, y);
    let n = x.len();
    let ym = mean(y);
    let flat = RegressionResult {
        slope: 0.0,
        intercept: ym,
        r_squared: 0.0,
        n,
    };
    if n < 2 {
        debug!(n, "too few pairs for regression");
        return flat;
    }

    if x.iter().all(|&v| v == x[0]) {
        debug!(n, "predictor has zero variance");
        return flat;
    }
    let (Some(var_x), Some(cov)) = (stats::variance(x), stats::covariance(x, y)) else {
        return flat;
    };
    if var_x == 0.0 {
        return flat;
    }

    let xm = mean(x);
    let slope = cov / var_x;
    let r = pearson_corr(x, y);
    RegressionResult {
        slope,
        intercept: ym - slope * xm,
        r_squared: r * r,
        n,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Correlation ──────────────────────────────────────────────

    #[test]
    fn pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson_corr(&x, &y) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((pearson_corr(&x, &y) + 1.0).abs() < 1e-10);
    }

    #[test]
    fn pearson_known_value() {
        // r for (1,2),(2,4),(3,5),(4,4),(5,5) = 0.7745966692
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert!((pearson_corr(&x, &y) - 0.774_596_669_2).abs() < 1e-9);
    }

    #[test]
    fn pearson_degenerate_is_zero() {
        assert_eq!(pearson_corr(&[], &[]), 0.0);
        assert_eq!(pearson_corr(&[1.0], &[2.0]), 0.0);
        assert_eq!(pearson_corr(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson_corr(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn pearson_truncates_to_shorter() {
        let x = [1.0, 2.0, 3.0, 100.0, -50.0];
        let y = [2.0, 4.0, 6.0];
        assert!((pearson_corr(&x, &y) - 1.0).abs() < 1e-10);
    }

    // ── Regression ───────────────────────────────────────────────

    #[test]
    fn regression_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 7.0).collect();
        let fit = linear_regression(&x, &y);
        assert!((fit.slope - 3.0).abs() < 1e-10);
        assert!((fit.intercept + 7.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
        assert_eq!(fit.n, 5);
    }

    #[test]
    fn regression_carbon_hardness() {
        let fit = linear_regression(&[0.2, 0.4, 0.6], &[30.0, 40.0, 50.0]);
        assert!((fit.slope - 50.0).abs() < 1e-9);
        assert!((fit.intercept - 20.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
    }

    #[test]
    fn regression_noisy_fit() {
        // OLS on (1,2),(2,4),(3,5),(4,4),(5,5): slope 0.6, intercept 2.2
        let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
        assert!((fit.slope - 0.6).abs() < 1e-10);
        assert!((fit.intercept - 2.2).abs() < 1e-10);
        assert!((fit.r_squared - 0.6).abs() < 1e-10);
    }

    #[test]
    fn regression_constant_x_is_flat() {
        let fit = linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 6.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 3.0);
        assert_eq!(fit.r_squared, 0.0);
    }

    #[test]
    fn regression_too_few_pairs() {
        let empty = linear_regression(&[], &[1.0, 2.0]);
        assert_eq!((empty.slope, empty.intercept, empty.r_squared), (0.0, 0.0, 0.0));
        assert_eq!(empty.n, 0);

        let single = linear_regression(&[1.0], &[9.0]);
        assert_eq!((single.slope, single.intercept, single.r_squared), (0.0, 9.0, 0.0));
    }

    #[test]
    fn regression_near_constant_x_is_flat() {
        // mean of repeated 0.1 is not exactly 0.1
        let fit = linear_regression(&[0.1, 0.1, 0.1], &[1.0, 2.0, 6.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 3.0);
    }

    #[test]
    fn regression_uses_sample_covariance_over_variance() {
        // cov = 1.5, var(x) = 2.5 for (1,2),(2,4),(3,5),(4,4),(5,5)
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = linear_regression(&x, &y);
        assert!((fit.slope - 1.5 / 2.5).abs() < 1e-12);
        assert!((fit.intercept - (mean(&y) - fit.slope * mean(&x))).abs() < 1e-12);
    }

    #[test]
    fn regression_constant_y_has_zero_r_squared() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.r_squared, 0.0);
    }
}
