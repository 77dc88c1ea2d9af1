//! Error type for the fallible corners of the crate.
//!
//! Almost every helper here is infallible by contract and reports failure as
//! `false` or a default value. Only configuration loading and the checked
//! trajectory solver return errors.

/// Errors produced by config loading and checked solvers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Flight time must be positive and finite.
    #[error("invalid flight time: {0}")]
    InvalidFlightTime(f32),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
