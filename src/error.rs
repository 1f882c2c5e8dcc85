use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

/// Everything that can stop a solve before the first iteration.
/// Once the iteration loop starts nothing is fallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("grid edge length must be at least 1, got {n}")]
    InvalidGridSize { n: usize },

    #[error("thread count must be at least 1, got {threads}")]
    InvalidThreadCount { threads: usize },

    #[error("thread count {threads} exceeds the {n} available z slices")]
    ThreadsExceedGrid { threads: usize, n: usize },

    #[error("grid spacing must be finite and positive, got {delta}")]
    InvalidDelta { delta: f64 },

    #[error("fixed boundary value must be finite, got {value}")]
    NonFiniteBoundary { value: f64 },

    #[error("{what} holds {actual} cells, grid needs {expected}")]
    FieldSizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("a grid with edge length {n} does not fit in memory addressing")]
    GridTooLarge { n: usize },

    #[error("failed to allocate {what} ({cells} cells)")]
    Allocation { what: &'static str, cells: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SolverError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        SolverError::ThreadPool(e.to_string())
    }
}
