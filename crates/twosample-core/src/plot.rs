//! Histogram rendering
//!
//! Draws the two samples as side-by-side frequency histograms in a single
//! PNG. Pure visualization over the input samples; nothing here feeds
//! back into the selection pipeline.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::errors::{StatsError, StatsResult};

const BIN_COUNT: usize = 10;
const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Render side-by-side histograms of the two samples to `path`.
pub fn histograms(
    sample_a: &[f64],
    sample_b: &[f64],
    labels: (&str, &str),
    path: &Path,
) -> StatsResult<()> {
    if sample_a.is_empty() || sample_b.is_empty() {
        return Err(StatsError::InsufficientData { n: 0, min: 1 });
    }

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_error)?;
    let (left, right) = root.split_horizontally((WIDTH / 2) as i32);

    draw_histogram(&left, sample_a, labels.0)?;
    draw_histogram(&right, sample_b, labels.1)?;

    root.present().map_err(to_plot_error)?;
    info!(path = %path.display(), "histogram written");
    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    sample: &[f64],
    label: &str,
) -> StatsResult<()> {
    let (min, max) = sample.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    // Degenerate range still gets a visible bar
    let span = if max > min { max - min } else { 1.0 };
    let bin_width = span / BIN_COUNT as f64;

    let mut counts = [0u32; BIN_COUNT];
    for &v in sample {
        let idx = (((v - min) / bin_width) as usize).min(BIN_COUNT - 1);
        counts[idx] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Histogram of {label}"), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min..min + span, 0u32..max_count + 1)
        .map_err(to_plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .draw()
        .map_err(to_plot_error)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + bin_width * i as f64;
            let x1 = x0 + bin_width;
            Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.7).filled())
        }))
        .map_err(to_plot_error)?;

    Ok(())
}

fn to_plot_error<E: std::fmt::Display>(e: E) -> StatsError {
    StatsError::Plot(e.to_string())
}
