//! Error type shared across the crate.

use std::fmt;

/// Errors produced while building, sampling, loading or rendering curves
#[derive(Debug)]
pub enum BezierError {
    /// A precondition on the input was violated (e.g. no control points)
    InvalidArgument(String),
    /// A scene or view description could not be parsed
    ParseError(String),
    /// The plotting backend failed to draw
    RenderError(String),
    /// Reading or writing a file failed
    Io(std::io::Error),
}

/// Result alias used by every fallible function of the crate
pub type BezierResult<T> = Result<T, BezierError>;

impl fmt::Display for BezierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::ParseError(msg) => write!(f, "parse error: {}", msg),
            Self::RenderError(msg) => write!(f, "render error: {}", msg),
            Self::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for BezierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BezierError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for BezierError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
