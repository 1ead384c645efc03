use reqwest::StatusCode;

/// Rejected before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("Please enter at least one URL")]
    NoUrls,
    #[error("No results to export")]
    NothingToExport,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Non-2xx answer. `message` is the `error` field of the body when the
    /// backend sent one.
    #[error("{}", .message.as_deref().unwrap_or("An error occurred"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    /// Connection failure, timeout, or a body that did not decode.
    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("scrape client is no longer running")]
    Closed,
}
