//! Test selection
//!
//! The decision core of the pipeline: screen both samples for normality
//! (Shapiro-Wilk) and for equal variances (Levene), then run exactly one
//! comparison test. If any preliminary p-value falls below alpha the
//! comparison is the Mann-Whitney U test; only when both samples look
//! normal AND the variances look equal is the pooled two-sample t-test
//! used.
//!
//! The routing is deliberately an OR over the three preliminary tests,
//! not a majority vote. Requiring, say, both normality tests to fail
//! would change reported conclusions, so the policy is fixed.

use tracing::debug;

use crate::errors::{StatsError, StatsResult};
use crate::tests::distributional::shapiro_wilk;
use crate::tests::nonparametric::{mann_whitney_u, MannWhitneyOptions};
use crate::tests::parametric::{levene, t_test, TTestOptions};

/// Default significance threshold
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Minimum observations per sample (Shapiro-Wilk requires 3)
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Which comparison test was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Pooled two-sample t-test
    TTest,
    /// Mann-Whitney U test
    MannWhitney,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::TTest => "t-test",
            Method::MannWhitney => "Mann-Whitney U test",
        }
    }
}

/// Outcome of a normality screen on one sample
#[derive(Debug, Clone)]
pub struct NormalityResult {
    /// Which sample was tested
    pub label: String,
    /// Shapiro-Wilk W statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// p-value >= alpha
    pub is_normal: bool,
}

/// Outcome of the variance-equality screen across both samples
#[derive(Debug, Clone)]
pub struct VarianceResult {
    /// Levene F statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// p-value >= alpha
    pub variances_equal: bool,
}

/// Outcome of the selected comparison test
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Which test was run
    pub method: Method,
    /// t or U statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// p-value < alpha
    pub significant: bool,
}

/// Full decision path for one comparison, as consumed by the report
/// formatter.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub normality_a: NormalityResult,
    pub normality_b: NormalityResult,
    pub variance: VarianceResult,
    pub comparison: ComparisonResult,
    /// Threshold used for every boolean derivation above
    pub alpha: f64,
}

/// Run the full screening-and-selection pipeline on two samples.
///
/// Validates inputs, screens normality and variance equality, then runs
/// the selected comparison test. Pure computation: the same inputs always
/// produce the same decision path and statistics.
///
/// # Errors
///
/// - `InvalidAlpha` if `alpha` is outside (0, 1).
/// - `InsufficientData` if either sample has fewer than 3 observations;
///   no statistical test executes in that case.
/// - `NonFiniteValue` if either sample contains NaN or infinities.
/// - `DegenerateSample` (propagated) for constant samples where a
///   statistic is undefined.
pub fn analyze(
    sample_a: &[f64],
    sample_b: &[f64],
    labels: (&str, &str),
    alpha: f64,
) -> StatsResult<Analysis> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidAlpha(alpha));
    }
    validate_sample(sample_a, labels.0)?;
    validate_sample(sample_b, labels.1)?;

    let shapiro_a = shapiro_wilk(sample_a)?;
    let shapiro_b = shapiro_wilk(sample_b)?;
    let levene_result = levene(sample_a, sample_b)?;

    let normality_a = NormalityResult {
        label: labels.0.to_string(),
        statistic: shapiro_a.statistic,
        p_value: shapiro_a.p_value,
        is_normal: shapiro_a.p_value >= alpha,
    };
    let normality_b = NormalityResult {
        label: labels.1.to_string(),
        statistic: shapiro_b.statistic,
        p_value: shapiro_b.p_value,
        is_normal: shapiro_b.p_value >= alpha,
    };
    let variance = VarianceResult {
        statistic: levene_result.statistic,
        p_value: levene_result.p_value,
        variances_equal: levene_result.p_value >= alpha,
    };

    // Any preliminary failure routes to the non-parametric path (OR, not
    // majority vote).
    let parametric_ok =
        normality_a.is_normal && normality_b.is_normal && variance.variances_equal;

    debug!(
        p_normal_a = normality_a.p_value,
        p_normal_b = normality_b.p_value,
        p_variance = variance.p_value,
        parametric = parametric_ok,
        "test selection"
    );

    let comparison = if parametric_ok {
        let result = t_test(sample_a, sample_b, &TTestOptions::default())?;
        ComparisonResult {
            method: Method::TTest,
            statistic: result.statistic,
            p_value: result.p_value,
            significant: result.p_value < alpha,
        }
    } else {
        let result = mann_whitney_u(sample_a, sample_b, &MannWhitneyOptions::default())?;
        ComparisonResult {
            method: Method::MannWhitney,
            statistic: result.statistic,
            p_value: result.p_value,
            significant: result.p_value < alpha,
        }
    };

    Ok(Analysis {
        normality_a,
        normality_b,
        variance,
        comparison,
        alpha,
    })
}

/// Select and run the appropriate comparison test.
///
/// Convenience wrapper around [`analyze`] returning only the comparison
/// outcome.
pub fn select_and_run(
    sample_a: &[f64],
    sample_b: &[f64],
    alpha: f64,
) -> StatsResult<ComparisonResult> {
    analyze(sample_a, sample_b, ("sample A", "sample B"), alpha).map(|a| a.comparison)
}

fn validate_sample(sample: &[f64], label: &str) -> StatsResult<()> {
    if sample.len() < MIN_SAMPLE_SIZE {
        return Err(StatsError::InsufficientData {
            n: sample.len(),
            min: MIN_SAMPLE_SIZE,
        });
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteValue {
            label: label.to_string(),
        });
    }
    Ok(())
}
