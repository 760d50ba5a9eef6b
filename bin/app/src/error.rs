//! Domain error types for the application shell and the static server.

use hashnav_router::RouteTableError;
use std::fmt;

/// Errors raised while assembling the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The bundled route declaration could not be parsed.
    InvalidRouteConfig { details: String },
    /// The route declaration parsed but the table was rejected.
    InvalidRouteTable(RouteTableError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRouteConfig { details } => {
                write!(f, "invalid route configuration: {}", details)
            }
            Self::InvalidRouteTable(err) => write!(f, "invalid route table: {}", err),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<RouteTableError> for ShellError {
    fn from(err: RouteTableError) -> Self {
        Self::InvalidRouteTable(err)
    }
}

/// Errors from the static file server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeError {
    /// Server configuration could not be loaded.
    Config { details: String },
    /// The listening socket could not be bound.
    Bind { addr: String, details: String },
    /// The server stopped with an error.
    Serve { details: String },
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => write!(f, "invalid server configuration: {}", details),
            Self::Bind { addr, details } => write!(f, "failed to bind to {}: {}", addr, details),
            Self::Serve { details } => write!(f, "server error: {}", details),
        }
    }
}

impl std::error::Error for ServeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_error_wraps_table_error() {
        let err = ShellError::from(RouteTableError::EmptyEntry { index: 4 });
        assert!(err.to_string().contains("invalid route table"));
        assert!(err.to_string().contains("entry 4"));
    }

    #[test]
    fn serve_error_display() {
        let err = ServeError::Bind {
            addr: "127.0.0.1:8080".to_string(),
            details: "address in use".to_string(),
        };
        assert!(err.to_string().contains("127.0.0.1:8080"));
        assert!(err.to_string().contains("address in use"));
    }
}
