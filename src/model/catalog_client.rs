//! Spotify Web API client for the four catalog calls the mood ring needs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::{log_api_request, log_api_result};
use super::types::{AccessToken, ArtistMatch, AudioFeatureSample, Credentials, Track};

const TOP_TRACKS_LIMIT: u32 = 100;

/// The catalog operations the controller depends on
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_access_token(&self, credentials: &Credentials) -> Result<AccessToken, CatalogError>;

    /// Returns at most one match; an empty list means no artist matched
    async fn search_artist_by_name(
        &self,
        token: &AccessToken,
        name: &str,
    ) -> Result<Vec<ArtistMatch>, CatalogError>;

    async fn fetch_top_tracks(
        &self,
        token: &AccessToken,
        artist_id: &str,
    ) -> Result<Vec<Track>, CatalogError>;

    /// `track_ids` is a comma separated id list
    async fn fetch_audio_features(
        &self,
        token: &AccessToken,
        track_ids: &str,
    ) -> Result<Vec<AudioFeatureSample>, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    artists: Page<ArtistMatch>,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct AudioFeaturesResponse {
    audio_features: Vec<Option<AudioFeatureSample>>,
}

#[derive(Debug, Clone)]
pub struct SpotifyCatalogClient {
    accounts_url: String,
    api_url: String,
    market: String,
    client: Client,
}

impl SpotifyCatalogClient {
    pub fn new(
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
        market: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            accounts_url: accounts_url.into(),
            api_url: api_url.into(),
            market: market.into(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        token: &AccessToken,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.api_url, path);
        log_api_request!(operation, url = %url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .header(header::AUTHORIZATION, token.bearer())
            .send()
            .await?;

        parse_response(operation, response).await
    }
}

async fn parse_response<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(operation, %status, body = %body, "Catalog API error");
        return Err(CatalogError::Api { status, body });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        let preview: String = text.chars().take(200).collect();
        CatalogError::Parse(format!("{} - Response: {}", e, preview))
    })
}

#[async_trait]
impl CatalogApi for SpotifyCatalogClient {
    async fn fetch_access_token(&self, credentials: &Credentials) -> Result<AccessToken, CatalogError> {
        let url = format!("{}/api/token", self.accounts_url);
        log_api_request!("fetch_access_token", url = %url);

        let result: Result<AccessToken, CatalogError> = async {
            let response = self
                .client
                .post(&url)
                .header(header::AUTHORIZATION, credentials.basic_authorization())
                .form(&[("grant_type", "client_credentials")])
                .send()
                .await?;
            let data: TokenResponse = parse_response("fetch_access_token", response).await?;
            Ok(AccessToken::new(data.access_token))
        }
        .await;

        log_api_result!("fetch_access_token", result);
        result
    }

    async fn search_artist_by_name(
        &self,
        token: &AccessToken,
        name: &str,
    ) -> Result<Vec<ArtistMatch>, CatalogError> {
        let result = self
            .get_json::<SearchResponse>(
                "search_artist_by_name",
                token,
                "/v1/search",
                &[("q", name), ("type", "artist"), ("limit", "1")],
            )
            .await
            .map(|data| data.artists.items);

        log_api_result!("search_artist_by_name", result);
        if let Ok(ref artists) = result {
            tracing::debug!(query = name, matches = artists.len(), "Artist search finished");
        }
        result
    }

    async fn fetch_top_tracks(
        &self,
        token: &AccessToken,
        artist_id: &str,
    ) -> Result<Vec<Track>, CatalogError> {
        let path = format!("/v1/artists/{}/top-tracks", artist_id);
        let limit = TOP_TRACKS_LIMIT.to_string();
        let result = self
            .get_json::<TopTracksResponse>(
                "fetch_top_tracks",
                token,
                &path,
                &[("limit", limit.as_str()), ("market", self.market.as_str())],
            )
            .await
            .map(|data| data.tracks);

        log_api_result!("fetch_top_tracks", result);
        result
    }

    async fn fetch_audio_features(
        &self,
        token: &AccessToken,
        track_ids: &str,
    ) -> Result<Vec<AudioFeatureSample>, CatalogError> {
        let result = self
            .get_json::<AudioFeaturesResponse>(
                "fetch_audio_features",
                token,
                "/v1/audio-features",
                &[("ids", track_ids)],
            )
            .await
            .map(|data| {
                let requested = data.audio_features.len();
                let samples: Vec<_> = data.audio_features.into_iter().flatten().collect();
                if samples.len() < requested {
                    tracing::warn!(
                        requested,
                        returned = samples.len(),
                        "Some tracks have no audio features"
                    );
                }
                samples
            });

        log_api_result!("fetch_audio_features", result);
        result
    }
}
