//! Probe server error types.

use std::fmt;
use std::io;
use std::net::SocketAddr;

/// Errors surfaced by the probe server.
#[derive(Debug)]
pub enum ServerError {
    /// Failed to bind the probe listener.
    Bind {
        addr: SocketAddr,
        error: io::Error,
    },

    /// Failed to accept an inbound connection.
    Accept(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, error } => {
                write!(f, "failed to bind {}: {}", addr, error)
            }
            ServerError::Accept(error) => write!(f, "failed to accept connection: {}", error),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { error, .. } => Some(error),
            ServerError::Accept(error) => Some(error),
        }
    }
}
