//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CsError` as one variant
//! where configuration problems can surface through them.

use thiserror::Error;

/// The top-level error type for `cs-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cs-core`.
pub type CsResult<T> = Result<T, CsError>;
