//! Statistical hypothesis testing
//!
//! The individual tests used by the selector:
//! - Shapiro-Wilk normality test ([`distributional`])
//! - Two-sample t-test and Levene's variance test ([`parametric`])
//! - Mann-Whitney U test ([`nonparametric`])


/// Alternative hypothesis for two-sided and one-sided tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// The distributions differ in either direction
    TwoSided,
    /// The first sample is stochastically smaller
    Less,
    /// The first sample is stochastically greater
    Greater,
}

/// Generic test result structure for all statistical tests
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test statistic (t, U, W, F)
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Degrees of freedom (f64::NAN if not applicable)
    pub df: f64,
    /// Total sample size
    pub n: usize,
    /// Group 1 sample size (for two-sample tests)
    pub n1: usize,
    /// Group 2 sample size (for two-sample tests)
    pub n2: usize,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Test method/name
    pub method: String,
}

impl Default for TestResult {
    fn default() -> Self {
        Self {
            statistic: f64::NAN,
            p_value: f64::NAN,
            df: f64::NAN,
            n: 0,
            n1: 0,
            n2: 0,
            alternative: Alternative::TwoSided,
            method: String::new(),
        }
    }
}

/// Filter NaN values from a slice
pub(crate) fn filter_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Two-sided/one-sided p-value from a symmetric null distribution CDF value.
///
/// `cdf` is P(X <= statistic) under the null.
pub(crate) fn p_from_cdf(cdf: f64, alternative: Alternative) -> f64 {
    let p = match alternative {
        Alternative::TwoSided => 2.0 * cdf.min(1.0 - cdf),
        Alternative::Less => cdf,
        Alternative::Greater => 1.0 - cdf,
    };
    p.clamp(0.0, 1.0)
}
