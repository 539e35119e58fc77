use serde_json::error::Category;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// Connection-level failure while talking to the backend.
    Transport,
    /// The request itself could not be constructed.
    Http,
    InvalidUri,
    /// JSON syntax error detected in a response body.
    Syntax,
    /// Unexpected JSON data types encountered.
    Data,
    /// Missing, expired, or rejected credential.
    Unauthorized,
    /// Business-rule rejection reported by the backend.
    Rejected(Box<str>),
    /// Any other non-success status code.
    Status(u16),
}

impl From<hyper::Error> for Error {
    fn from(_: hyper::Error) -> Self {
        Self::Transport
    }
}

impl From<hyper_util::client::legacy::Error> for Error {
    fn from(_: hyper_util::client::legacy::Error) -> Self {
        Self::Transport
    }
}

impl From<hyper::http::Error> for Error {
    fn from(_: hyper::http::Error) -> Self {
        Self::Http
    }
}

impl From<hyper::http::uri::InvalidUri> for Error {
    fn from(_: hyper::http::uri::InvalidUri) -> Self {
        Self::InvalidUri
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Data,
            Category::Syntax => Self::Syntax,
            _ => Self::Transport,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(msg) => f.write_str(msg),
            Self::Status(code) => write!(f, "Unexpected status code {code}."),
            Self::Transport => f.write_str("Failed to reach the backend."),
            Self::Http => f.write_str("Failed to construct the request."),
            Self::InvalidUri => f.write_str("Invalid URI."),
            Self::Syntax => f.write_str("Syntax error in JSON detected."),
            Self::Data => f.write_str("Unexpected data types in JSON detected."),
            Self::Unauthorized => f.write_str("Not authenticated."),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
