//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PowerHubError`] via `#[from]`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum PowerHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("power must be a finite, non-negative number of watts, got {value}")]
    InvalidPower { value: f64 },
}
