use thiserror::Error;

/// Errors raised by the image and collection models.
///
/// Mutations that receive well-formed input never fail, and removals of
/// absent models or listeners are silent no-ops, so callers only see these
/// when they hand the model something it cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Input rejected before any state changed (out-of-range rating,
    /// duplicate collection membership).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of something that is not there.
    #[error("not found: {0}")]
    NotFound(String),
}
