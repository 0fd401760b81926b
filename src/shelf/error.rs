use crate::model::PriceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed command on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Invalid price {value:?} on line {line}: {source}")]
    InvalidPrice {
        line: usize,
        value: String,
        #[source]
        source: PriceError,
    },

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ShelfError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
