use thiserror::Error;

pub type Result<T> = std::result::Result<T, LarderError>;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} for {url}")]
    Http { url: String, status: u16 },

    /// The listing renders no pagination control at all. Kept distinct
    /// from [`LarderError::Pagination`] so the orchestrator can treat
    /// the listing as a single page instead of aborting.
    #[error("listing page has no pagination control")]
    NoPagination,

    #[error("could not determine page count: {0}")]
    Pagination(String),

    #[error("no recognizable recipe card at {0}")]
    UnknownLayout(String),

    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
