//! Model module - Application state, data types and the catalog client
//!
//! - `types`: Core records (credentials, token, tracks, audio features, mood summary)
//! - `catalog_client`: Spotify Web API client behind the `CatalogApi` trait
//! - `app_model`: Presentation state with accessors for each UI region

mod types;
mod catalog_client;
mod app_model;

pub use types::{ArtistMatch, Credentials, MoodSummary, UiState, MIN_INTENSITY};

#[cfg(test)]
pub use types::{AccessToken, AudioFeatureSample, MoodReport, Track};

pub use catalog_client::{CatalogApi, SpotifyCatalogClient};

pub use app_model::AppModel;
