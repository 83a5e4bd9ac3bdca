//! Failure taxonomy shared by the ingest and report handlers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    /// Feed unreachable or answered with a non-success status.
    #[error("Failed to fetch exchange rate feed from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Feed document does not have the expected shape.
    #[error("Failed to parse exchange rate feed: {0}")]
    Parse(String),

    /// Backing store rejected a write or a query.
    #[error("Exchange rate store error: {0}")]
    Store(String),
}

impl RateError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        RateError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<fjall::Error> for RateError {
    fn from(e: fjall::Error) -> Self {
        RateError::Store(e.to_string())
    }
}

impl From<quick_xml::DeError> for RateError {
    fn from(e: quick_xml::DeError) -> Self {
        RateError::Parse(e.to_string())
    }
}
