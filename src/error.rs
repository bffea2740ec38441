//! Error types shared by the catalog client, the model and the controller

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned status: {status} - {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoodError {
    #[error("no audio features to summarize")]
    NoSamples,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("could not acquire an access token: {0}")]
    Token(#[from] CatalogError),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search rejected: {0}")]
    Rejected(&'static str),

    #[error("no access token stored for this session")]
    NoToken,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Mood(#[from] MoodError),
}
