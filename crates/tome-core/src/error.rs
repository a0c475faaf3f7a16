use thiserror::Error;

/// Application-wide error types for Tome.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// A selector or document could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Writing the output table failed.
    #[error("Output error: {0}")]
    OutputError(String),

    /// Invalid startup configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error came from the transport layer.
    ///
    /// Transport errors never abort a run; the page fetcher turns them into
    /// a stop signal.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::Timeout(_) | AppError::NetworkError(_)
        )
    }
}

/// Why a single listing block was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// A required sub-element or attribute is not present.
    #[error("missing {0}")]
    MissingField(&'static str),
}
