// error.rs - Error types for grid construction, seeding and configuration

use thiserror::Error;

/// Errors raised by the engine.
///
/// Stepping a well-formed grid never fails; everything here is rejected at
/// construction or configuration time, except the two variants produced by
/// the row-coroutine runtime.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Width or height is zero, or `width * height` does not fit in memory.
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Initial density outside `[0, 1]`.
    #[error("invalid density {0}: expected a probability in [0, 1]")]
    InvalidDensity(f64),

    /// Tick interval is not a positive number of seconds.
    #[error("invalid tick interval {0}s")]
    InvalidTickInterval(f32),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Malformed configuration document.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The tokio runtime backing the row-coroutine engine failed to start.
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A row task panicked or was cancelled.
    #[error("row task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;
