//! # Core Error Types
//!
//! The contract itself almost never fails: malformed options are clamped,
//! not reported. The only typed failure is parsing a color string for hosts
//! that want to validate palettes up front.

use thiserror::Error;

/// Errors raised by the core contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
