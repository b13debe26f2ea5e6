use fantoccini::error::{CmdError, NewSessionError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for a single page extraction, surfaced per URL to
/// the batch collector.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page's action button never appeared within the wait budget.
    #[error("timed out waiting for the page action button")]
    Timeout,

    /// No WebDriver session could be established on any known endpoint.
    #[error("could not establish a WebDriver session: {0}")]
    Session(NewSessionError),

    /// A WebDriver command failed while driving the page.
    #[error("webdriver command failed: {0}")]
    Transport(CmdError),

    /// The rendered markup carried nothing recognizable as a song page.
    #[error("page markup had no recognizable song metadata")]
    Parse,

    /// Caller-side contract violation, e.g. an unparsable input URL.
    #[error("invalid input: {0}")]
    Precondition(String),
}

impl From<CmdError> for ScrapeError {
    fn from(err: CmdError) -> Self {
        match err {
            CmdError::WaitTimeout => ScrapeError::Timeout,
            other => ScrapeError::Transport(other),
        }
    }
}

/// Failure kinds for a single file download.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The URL path has no usable file segment to name the local file.
    #[error("no usable file segment in {0}")]
    BadUrl(String),

    /// Request construction, connection, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be written to the local file.
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_timeout_maps_to_timeout() {
        let err = ScrapeError::from(CmdError::WaitTimeout);
        assert!(matches!(err, ScrapeError::Timeout));
    }

    #[test]
    fn test_other_cmd_errors_map_to_transport() {
        let err = ScrapeError::from(CmdError::NotW3C(serde_json::Value::Null));
        assert!(matches!(err, ScrapeError::Transport(_)));
    }
}
