use std::fmt;
use std::io;

use thiserror::Error;

use crate::fetch::Response;

#[derive(Error, Debug)]
pub enum SleuthError {
    #[error("No WHOIS host set for query")]
    MissingHost,

    #[error("WHOIS connection to {host} failed: {source}")]
    ConnectionFailed {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("WHOIS exchange failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl SleuthError {
    /// True when a deadline expired, as opposed to the server being unreachable.
    pub fn is_timeout(&self) -> bool {
        match self {
            SleuthError::Timeout(_) => true,
            SleuthError::ConnectionFailed { source, .. } | SleuthError::Io(source) => {
                source.kind() == io::ErrorKind::TimedOut
            }
            SleuthError::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// True when no connection to the server could be established.
    pub fn is_connection(&self) -> bool {
        match self {
            SleuthError::MissingHost => true,
            SleuthError::ConnectionFailed { source, .. } => source.kind() != io::ErrorKind::TimedOut,
            SleuthError::HttpError(e) => e.is_connect() && !e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SleuthError>;

/// A failed fetch, carrying the response as far as it got.
///
/// `response` always has its request and `fetched_at` set. Its body holds
/// whatever arrived before the failure and its content type is `None`.
#[derive(Debug)]
pub struct FetchFailure<'a> {
    pub response: Response<'a>,
    pub error: SleuthError,
}

impl<'a> FetchFailure<'a> {
    pub fn new(response: Response<'a>, error: SleuthError) -> Self {
        Self { response, error }
    }

    pub fn into_parts(self) -> (Response<'a>, SleuthError) {
        (self.response, self.error)
    }

    pub fn into_error(self) -> SleuthError {
        self.error
    }
}

impl fmt::Display for FetchFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for FetchFailure<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}
