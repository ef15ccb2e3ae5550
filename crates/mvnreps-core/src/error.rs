//! Errors raised while building a query or talking to Maven Central.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid coordinate '{coordinate}': expected 'groupId:artifactId'")]
    InvalidCoordinate { coordinate: String },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to read response: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
