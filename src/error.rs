use thiserror::Error;

/// Errors raised by the graph builders and the search driver.
///
/// Read failures from a [`SequenceSource`](crate::io::SequenceSource) are not
/// listed here; they are forwarded unchanged as `anyhow::Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// k-mers must be at least one base long
    #[error("invalid k-mer length {0}: k must be at least 1")]
    InvalidK(usize),
    /// The search window is empty
    #[error("invalid search bounds: start_k {start_k} is greater than max_k {max_k}")]
    InvalidBounds { start_k: usize, max_k: usize },
}
