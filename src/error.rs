//! Error types for jsonstub

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Everything that can go wrong between startup and writing a response.
///
/// Routing misses and non-HTTP input are not errors: they produce fixed
/// 400 responses instead.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The properties file is missing or unreadable
    #[error("unable to load server properties from {}: {source}", .path.display())]
    ConfigLoad { path: PathBuf, source: io::Error },

    /// The properties file was read but holds no entries
    #[error("server properties at {} contain no entries", .0.display())]
    EmptyConfig(PathBuf),

    /// The listening socket could not be bound
    #[error("unable to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    /// The client stream failed before end-of-input
    #[error("failed to read request: {0}")]
    Input(#[source] io::Error),

    /// A mapped file exists but could not be read
    #[error("failed to read resource {}: {source}", .path.display())]
    Resource { path: PathBuf, source: io::Error },

    /// The response could not be written back
    #[error("failed to write response: {0}")]
    Output(#[source] io::Error),
}
