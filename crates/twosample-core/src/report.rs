//! Report formatting
//!
//! Renders one human-readable text block per comparison from the
//! selector's outputs. No decision logic lives here; every verdict line
//! restates a boolean already derived by the selector. Floats are written
//! with `Display`, whose shortest-round-trip form means a re-parsed
//! p-value or statistic is bit-identical to the original.

use std::path::Path;

use tracing::info;

use crate::errors::StatsResult;
use crate::selector::{Analysis, Method};

// Writing into a String cannot fail, so the block is assembled from
// plain lines instead of fmt::Write results.
fn line(out: &mut String, text: String) {
    out.push_str(&text);
    out.push('\n');
}

/// Render a full comparison block.
pub fn render(analysis: &Analysis, description: &str) -> String {
    let mut out = String::new();
    line(&mut out, description.to_string());

    for normality in [&analysis.normality_a, &analysis.normality_b] {
        line(
            &mut out,
            format!(
                "Shapiro-Wilk test ({}): p-value = {}",
                normality.label, normality.p_value
            ),
        );
        let verdict = if normality.is_normal { "" } else { "NOT " };
        line(
            &mut out,
            format!("{} sample is {verdict}normally distributed.", normality.label),
        );
    }

    line(
        &mut out,
        format!("Levene test: p-value = {}", analysis.variance.p_value),
    );
    if analysis.variance.variances_equal {
        line(&mut out, "The variances are equal.".to_string());
    } else {
        line(&mut out, "The variances are NOT equal.".to_string());
    }

    let comparison = &analysis.comparison;
    match comparison.method {
        Method::MannWhitney => {
            line(
                &mut out,
                format!(
                    "Mann-Whitney U test: U = {}, p-value = {}",
                    comparison.statistic, comparison.p_value
                ),
            );
        }
        Method::TTest => {
            line(&mut out, format!("T-statistic: {}", comparison.statistic));
            line(&mut out, format!("P-value: {}", comparison.p_value));
        }
    }
    let verdict = if comparison.significant { "" } else { "NOT " };
    line(
        &mut out,
        format!(
            "The means are {verdict}significantly different ({}).",
            comparison.method.name()
        ),
    );

    out
}

/// Render a block for a comparison skipped because a filter matched no
/// rows.
pub fn render_skipped(description: &str, reason: &str) -> String {
    format!("{description}\nSkipped: {reason}\n")
}

/// Write comparison blocks to `path`, separated by blank lines.
pub fn write_report(path: &Path, blocks: &[String]) -> StatsResult<()> {
    let body = blocks.join("\n");
    std::fs::write(path, body)?;
    info!(path = %path.display(), blocks = blocks.len(), "report written");
    Ok(())
}
