use thiserror::Error;

/// Rejected effect tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{0} must not be zero")]
    ZeroCount(&'static str),
    #[error("invalid effects config: {0}")]
    Parse(#[from] serde_json::Error),
}
