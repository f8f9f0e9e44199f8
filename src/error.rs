// src/error.rs
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Expected element, attribute, row or cell is absent.
    #[error("page structure mismatch: {context}")]
    Structure { context: String },

    #[error("malformed data: {context}")]
    DataShape { context: String },

    #[error("team not in abbreviation table: {0:?}")]
    UnknownTeam(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub fn structure(context: impl Into<String>) -> Self {
        ScrapeError::Structure { context: context.into() }
    }

    pub fn data_shape(context: impl Into<String>) -> Self {
        ScrapeError::DataShape { context: context.into() }
    }
}
