// web_app/api/error.rs - Scraper backend errors

use thiserror::Error;

use crate::web_app::model::SearchFailure;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("scraper backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("scraper backend sent an unreadable response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("scraper backend rejected the search (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
}

impl BackendError {
    /// Collapse into what the page needs to know.
    ///
    /// Only a rejection carries a message worth showing; everything else is
    /// reported as a connectivity problem.
    pub fn into_failure(self) -> SearchFailure {
        match self {
            BackendError::Rejected { message, .. } => SearchFailure::Rejected { message },
            BackendError::Client(_) | BackendError::Unreachable(_) | BackendError::InvalidResponse(_) => {
                SearchFailure::Unreachable
            }
        }
    }
}
