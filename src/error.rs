//! Error taxonomy for session commands and extraction.
//!
//! Extractors return typed errors instead of swallowing failures internally;
//! the orchestrator is the single place that converts an error into an
//! absent snapshot field, after logging the reason. This keeps "why is this
//! field missing" answerable from the logs while preserving the
//! absent-on-mismatch contract of the output record.

use thiserror::Error;

/// A failure in the browser session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Could not establish a session with the WebDriver endpoint.
    #[error("failed to connect to webdriver: {0}")]
    Connect(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command (navigation, source retrieval, click, back)
    /// failed after the session was established.
    #[error("webdriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    /// A positional control lookup found fewer controls than expected.
    #[error("no {control} control at index {index} on the current page")]
    ControlNotFound {
        /// The tag of the control that was looked up.
        control: &'static str,
        /// The zero-based index that was out of range.
        index: usize,
    },
}

/// A failure inside one extractor.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An expected markup node or attribute is absent. The payload names
    /// the selector or attribute that did not match.
    #[error("expected markup not found: {0}")]
    Structural(&'static str),

    /// The browser session failed mid-extraction.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A session-independent HTTP fetch failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A scraped href or src could not be resolved against its base URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
