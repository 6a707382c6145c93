//! twosample-core: Two-sample statistical comparison pipeline
//!
//! Given two numeric samples, this crate screens each for normality
//! (Shapiro-Wilk) and both for equal variances (Levene, median-centered),
//! then routes to exactly one hypothesis test: a pooled two-sample t-test
//! when every preliminary test passes, and the Mann-Whitney U test
//! otherwise. Companion modules generate synthetic samples, extract
//! columns from CSV input, render textual reports, and draw histograms.

pub mod data;
pub mod errors;
pub mod plot;
pub mod report;
pub mod selector;
pub mod table;
pub mod tests;

pub use errors::{StatsError, StatsResult};
pub use selector::{analyze, select_and_run, Analysis, ComparisonResult, Method};
