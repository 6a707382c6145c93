use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid alpha parameter: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    #[error("Insufficient data: {n} observations (need at least {min})")]
    InsufficientData { n: usize, min: usize },

    #[error("Sample '{label}' contains non-finite values")]
    NonFiniteValue { label: String },

    #[error("Sample size {n} exceeds the supported maximum of {max}")]
    SampleTooLarge { n: usize, max: usize },

    #[error("Filter for '{label}' matched zero rows")]
    EmptyFilter { label: String },

    #[error("Column '{0}' not found in input")]
    MissingColumn(String),

    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    #[error("Invalid distribution parameter: {0}")]
    InvalidDistribution(String),

    // Numerical errors
    #[error("Distribution error: {0}")]
    Distribution(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
