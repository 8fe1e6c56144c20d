use crate::keys::KeySet;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyboardError>;

#[derive(Debug, Error)]
pub enum KeyboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid row table: {message}")]
    InvalidRowTable { message: String },

    #[error("Label table {set} has {got} labels, expected {expected}")]
    LabelTableLength {
        set: KeySet,
        expected: usize,
        got: usize,
    },

    #[error("Key index {index} out of range (key count {count})")]
    KeyIndexOutOfRange { index: usize, count: usize },

    #[error("Invalid curvature: {0}")]
    InvalidCurvature(f64),

    #[error("No theme tagged '{0}'")]
    ThemeNotFound(String),

    #[error("Invalid geometry: {message}")]
    Geometry { message: String },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<toml::de::Error> for KeyboardError {
    fn from(err: toml::de::Error) -> Self {
        KeyboardError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for KeyboardError {
    fn from(err: serde_json::Error) -> Self {
        KeyboardError::Json(err.to_string())
    }
}
