//! Log sink adapter error types.

/// Errors specific to the log sink adapter.
#[derive(Debug, thiserror::Error)]
pub enum LogSinkError {
    /// The requested logger kind is not one of the supported destinations.
    #[error("unknown logger kind {0:?}, expected \"console\" or \"file\"")]
    UnknownKind(String),
}
