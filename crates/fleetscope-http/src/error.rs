//! Error types for the HTTP transport layer.

use thiserror::Error;

/// Errors that can occur while running the HTTP server.
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}
