use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::report;
use super::task::ProbeTask;

/// Response metadata for a probe that got an answer, whatever the status.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub task: ProbeTask,
    pub http_status: u16,
    /// Lowercased header name to the first value seen for it.
    pub headers: BTreeMap<String, String>,
}

impl ProbeResult {
    /// First value of header `name`, or an empty string when the response lacked it.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    #[error("parse {0:?}")]
    InvalidUri(String, #[source] url::ParseError),

    #[error("unsupported protocol scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("probe task did not complete")]
    Aborted(#[source] tokio::task::JoinError),
}

/// A probe that produced no response.
#[derive(Debug)]
pub struct ProbeFailure {
    pub task: ProbeTask,
    pub error: ProbeError,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.task, report(&self.error))
    }
}
