//! Command-line front end for the two-sample comparison pipeline.
//!
//! Two modes: `synthetic` compares two seeded synthetic samples, `table`
//! compares two filtered groups from a CSV file, one comparison block per
//! requested value column. Exit code is non-zero on invalid input; a
//! filter matching zero rows only skips that comparison.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use twosample_core::data::{generate, Distribution};
use twosample_core::report::{render, render_skipped, write_report};
use twosample_core::selector::{analyze, DEFAULT_ALPHA};
use twosample_core::table::{load_column_from_path, ColumnFilter};
use twosample_core::{plot, StatsError};

#[derive(Parser)]
#[command(name = "twosample", about = "Two-sample statistical comparison", version)]
struct Cli {
    /// Significance threshold
    #[arg(long, default_value_t = DEFAULT_ALPHA, global = true)]
    alpha: f64,

    /// Report output path
    #[arg(long, short, default_value = "report.txt", global = true)]
    output: PathBuf,

    /// Also render side-by-side histograms to this PNG path; in table
    /// mode each comparison gets its own file, with the column name
    /// appended to the file stem
    #[arg(long, global = true)]
    histogram: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two seeded synthetic samples
    Synthetic(SyntheticArgs),
    /// Compare two filtered groups from a CSV file
    Table(TableArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum DistributionKind {
    Normal,
    Uniform,
}

#[derive(Args)]
struct SyntheticArgs {
    /// Source distribution for both samples
    #[arg(long, value_enum, default_value = "normal")]
    distribution: DistributionKind,

    /// Observations per sample
    #[arg(long, default_value_t = 200)]
    size: usize,

    /// Seed for the first sample
    #[arg(long, default_value_t = 1234)]
    seed_a: u64,

    /// Seed for the second sample
    #[arg(long, default_value_t = 5678)]
    seed_b: u64,

    /// Mean (normal) of both samples
    #[arg(long, default_value_t = 0.0)]
    mean: f64,

    /// Standard deviation (normal)
    #[arg(long, default_value_t = 1.0)]
    std_dev: f64,

    /// Lower bound (uniform)
    #[arg(long, default_value_t = -3.0)]
    low: f64,

    /// Upper bound (uniform)
    #[arg(long, default_value_t = 3.0)]
    high: f64,

    /// Report description line
    #[arg(long, default_value = "Analysis of synthetic data")]
    description: String,
}

#[derive(Args)]
struct TableArgs {
    /// CSV input path
    #[arg(long, short)]
    input: PathBuf,

    /// Value column(s); each produces one comparison block
    #[arg(long = "column", required = true)]
    columns: Vec<String>,

    /// Equality filters for group A, as column=value
    #[arg(long = "where-a", value_parser = parse_filter)]
    where_a: Vec<ColumnFilter>,

    /// Equality filters for group B, as column=value
    #[arg(long = "where-b", value_parser = parse_filter)]
    where_b: Vec<ColumnFilter>,

    /// Label for group A
    #[arg(long, default_value = "Group A")]
    label_a: String,

    /// Label for group B
    #[arg(long, default_value = "Group B")]
    label_b: String,

    /// Report description line (column name is appended)
    #[arg(long, default_value = "Two-sample comparison")]
    description: String,
}

fn parse_filter(raw: &str) -> std::result::Result<ColumnFilter, String> {
    match raw.split_once('=') {
        Some((column, value)) if !column.is_empty() => Ok(ColumnFilter::new(column, value)),
        _ => Err(format!("expected column=value, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Synthetic(args) => run_synthetic(&cli, args),
        Command::Table(args) => run_table(&cli, args),
    }
}

fn run_synthetic(cli: &Cli, args: &SyntheticArgs) -> Result<()> {
    let dist = match args.distribution {
        DistributionKind::Normal => Distribution::Normal {
            mean: args.mean,
            std_dev: args.std_dev,
        },
        DistributionKind::Uniform => Distribution::Uniform {
            low: args.low,
            high: args.high,
        },
    };

    let sample_a = generate(dist, args.size, args.seed_a)?;
    let sample_b = generate(dist, args.size, args.seed_b)?;

    let analysis = analyze(&sample_a, &sample_b, ("Data1", "Data2"), cli.alpha)
        .context("comparison failed")?;
    write_report(&cli.output, &[render(&analysis, &args.description)])?;

    if let Some(histogram_path) = &cli.histogram {
        plot::histograms(&sample_a, &sample_b, ("Data1", "Data2"), histogram_path)?;
    }
    Ok(())
}

fn run_table(cli: &Cli, args: &TableArgs) -> Result<()> {
    let mut blocks = Vec::new();

    for column in &args.columns {
        let description = format!("{} ({})", args.description, column);
        match load_groups(args, column) {
            Ok((sample_a, sample_b)) => {
                let analysis = analyze(
                    &sample_a,
                    &sample_b,
                    (&args.label_a, &args.label_b),
                    cli.alpha,
                )
                .with_context(|| format!("comparison failed for column '{column}'"))?;
                blocks.push(render(&analysis, &description));
                if let Some(base) = &cli.histogram {
                    plot::histograms(
                        &sample_a,
                        &sample_b,
                        (&args.label_a, &args.label_b),
                        &histogram_path_for(base, column),
                    )?;
                }
            }
            // A filter matching no rows skips this comparison; the batch
            // continues with the remaining columns.
            Err(err @ StatsError::EmptyFilter { .. }) => {
                warn!(column = %column, %err, "comparison skipped");
                blocks.push(render_skipped(&description, &err.to_string()));
            }
            Err(err) => return Err(err.into()),
        }
    }

    write_report(&cli.output, &blocks)?;
    Ok(())
}

// hist.png + "breslow" -> hist-breslow.png, one image per comparison
fn histogram_path_for(base: &Path, column: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("histogram");
    let mut name = format!("{stem}-{column}");
    if let Some(ext) = base.extension().and_then(|s| s.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    base.with_file_name(name)
}

fn load_groups(args: &TableArgs, column: &str) -> Result<(Vec<f64>, Vec<f64>), StatsError> {
    let sample_a = load_column_from_path(&args.input, column, &args.where_a, &args.label_a)?;
    let sample_b = load_column_from_path(&args.input, column, &args.where_b, &args.label_b)?;
    Ok((sample_a, sample_b))
}
