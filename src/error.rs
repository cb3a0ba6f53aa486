use thiserror::Error;

/// Errors raised when a caller violates the contract of the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    /// A count was zero, a range was empty, or an input sequence had no elements.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FitError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Failures while handing results to a chart sink.
///
/// These never invalidate the computed trials; callers can still print the
/// numeric summary after one occurs.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write chart data: {0}")]
    Csv(#[from] csv::Error),
    #[error("chart output i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
