use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the doodle pad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid brush range: min {min} must be positive and not above max {max}")]
    InvalidBrushRange { min: f32, max: f32 },

    #[error("Default brush width {width} is outside {min}..={max}")]
    InvalidDefaultWidth { width: f32, min: f32, max: f32 },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
