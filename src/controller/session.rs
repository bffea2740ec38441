//! Session startup and the artist search chain

use crate::error::{CatalogError, MoodError, SearchError, StartupError};
use crate::model::{ArtistMatch, Credentials, MoodSummary};
use super::AppController;

/// Lifecycle of one session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    TokenPending,
    Ready,
    Searching,
}

/// How a completed search ended
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found { artist: ArtistMatch, summary: MoodSummary },
    NotFound { query: String },
}

pub fn not_found_message(name: &str) -> String {
    format!(
        "Sorry, we couldn't find an artist named {}. Please try a new search.",
        name
    )
}

fn failure_message(name: &str, error: &SearchError) -> String {
    match error {
        SearchError::NoToken => {
            "Not connected to Spotify. Restart the app to get a new session.".to_string()
        }
        SearchError::Mood(MoodError::NoSamples) => {
            format!("Spotify has no audio features for {}'s top tracks.", name)
        }
        SearchError::Catalog(CatalogError::Api { status, .. }) => {
            format!("Spotify rejected the lookup for {} ({}). Please try again.", name, status)
        }
        _ => format!("Couldn't reach Spotify while searching for {}. Please try again.", name),
    }
}

impl AppController {
    /// Acquire the session token and store it on the model
    pub async fn startup(&self, credentials: &Credentials) -> Result<(), StartupError> {
        self.set_session_state(SessionState::TokenPending).await;
        tracing::info!(client_id = %credentials.client_id, "Requesting access token");

        let token = self.catalog.fetch_access_token(credentials).await?;
        self.model.write_stored_token(token).await;

        self.set_session_state(SessionState::Ready).await;
        tracing::info!("Session ready");
        Ok(())
    }

    /// Run the search chain for the current input
    pub async fn search(&self) -> Result<SearchOutcome, SearchError> {
        if self.session_state().await != SessionState::Ready {
            tracing::warn!("Search triggered before the session was ready");
            return Err(SearchError::Rejected("session is not ready"));
        }

        let name = self.model.read_search_input().await.trim().to_string();
        if name.is_empty() {
            tracing::warn!("Search triggered with empty input");
            return Err(SearchError::Rejected("search input is empty"));
        }

        if !self.model.begin_search().await {
            tracing::warn!(query = %name, "Search already running, ignoring trigger");
            return Err(SearchError::Rejected("a search is already running"));
        }
        self.set_session_state(SessionState::Searching).await;

        let result = self.run_search(&name).await;
        if let Err(ref e) = result {
            tracing::error!(query = %name, error = %e, "Search failed");
            self.model.show_error(failure_message(&name, e)).await;
            self.model.reset_search_input().await;
        }

        self.model.end_search().await;
        self.set_session_state(SessionState::Ready).await;
        result
    }

    async fn run_search(&self, name: &str) -> Result<SearchOutcome, SearchError> {
        self.model.clear_error().await;
        let token = self.model.read_stored_token().await.ok_or(SearchError::NoToken)?;

        let artists = self.catalog.search_artist_by_name(&token, name).await?;
        let Some(artist) = artists.into_iter().next() else {
            tracing::info!(query = %name, "No artist found");
            self.model.show_error(not_found_message(name)).await;
            self.model.reset_search_input().await;
            return Ok(SearchOutcome::NotFound { query: name.to_string() });
        };

        let tracks = self.catalog.fetch_top_tracks(&token, &artist.id).await?;
        let samples = if tracks.is_empty() {
            Vec::new()
        } else {
            let ids = tracks
                .iter()
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
                .join(",");
            self.catalog.fetch_audio_features(&token, &ids).await?
        };

        let summary = MoodSummary::from_samples(&samples)?;
        tracing::info!(
            artist = %artist.name,
            tracks = samples.len(),
            danceability = summary.danceability,
            intensity = summary.intensity,
            euphoria = summary.euphoria,
            acousticness = summary.acousticness,
            "Mood summary computed"
        );

        self.model.render_mood_summary(&summary, &artist.name, samples.len()).await;
        self.model.reset_search_input().await;
        Ok(SearchOutcome::Found { artist, summary })
    }
}
