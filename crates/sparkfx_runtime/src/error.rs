//! # Runtime Error Types
//!
//! All errors the orchestrator surfaces to the host. Everything else
//! (bad deltas, bad options, misbehaving recipes) is absorbed locally.

use thiserror::Error;

/// Errors that can occur in the runtime.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// `trigger` was given a name nobody registered.
    #[error("effect not found: {0:?}")]
    EffectNotFound(String),

    /// A second effect was registered under an existing name.
    #[error("effect already registered: {0:?}")]
    DuplicateEffect(String),

    /// The active set is full.
    #[error("too many active instances: limit is {limit}")]
    TooManyInstances {
        /// Configured maximum.
        limit: usize,
    },

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
