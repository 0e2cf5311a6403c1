//! Error types and handling for the lattice utility library

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for lattice operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for lattice operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Activity error: {0}")]
    ActivityError(#[from] ActivityError),

    #[error("Visitor error: {0}")]
    VisitorError(#[from] VisitorError),

    #[error("Properties error: {0}")]
    PropertiesError(#[from] PropertiesError),

    #[error("Platform error: {0}")]
    PlatformError(#[from] PlatformError),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

// -------------------- Sub-Error Categories --------------------

/// Failures raised by the activity execution framework
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("Cardinality mismatch in activity '{activity}': an aggregator must be invoked on a vector of values")]
    CardinalityMismatch { activity: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Activity '{activity}' at index {index} failed: {source}")]
    Failed {
        activity: String,
        index: usize,
        #[source]
        source: Box<ActivityError>,
    },

    #[error("Activity '{activity}' at index {index} did not deliver a result (worker terminated)")]
    Terminated { activity: String, index: usize },

    #[error("Worker pool unavailable: completion queue disconnected")]
    PoolUnavailable,
}

/// Failures raised by the object-graph visitor
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VisitorError {
    #[error("Node '{path}' is read-only")]
    ReadOnlyNode { path: String },

    #[error("Path '{path}' no longer exists in the visited document")]
    PathNotFound { path: String },
}

/// Failures raised while parsing properties files
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PropertiesError {
    #[error("Malformed entry at line {line}: {content}")]
    Malformed { line: usize, content: String },

    #[error("I/O error reading properties: {0}")]
    Io(#[from] io::Error),
}

/// Failures raised by platform inspection helpers
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlatformError {
    #[error("Operation not supported on platform '{platform}'")]
    Unsupported { platform: String },

    #[error("I/O error inspecting platform: {0}")]
    Io(#[from] io::Error),
}
