//! Core type definitions for the application

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::error::MoodError;

/// Lowest intensity a report row is drawn with, so low scores stay legible
pub const MIN_INTENSITY: f64 = 0.3;

/// Application credentials for the client-credentials grant
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Value for the `Authorization` header of the token request
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token returned by the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.as_str())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// An artist returned by the catalog search
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ArtistMatch {
    pub id: String,
    pub name: String,
}

/// The subset of a track needed to request its audio features
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: String,
}

/// Per-track scores reported by the catalog, each in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AudioFeatureSample {
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub acousticness: f64,
}

/// Mean audio features across one artist's top tracks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodSummary {
    pub danceability: f64,
    pub intensity: f64,
    pub euphoria: f64,
    pub acousticness: f64,
}

impl MoodSummary {
    pub fn from_samples(samples: &[AudioFeatureSample]) -> Result<Self, MoodError> {
        if samples.is_empty() {
            return Err(MoodError::NoSamples);
        }

        let count = samples.len() as f64;
        let mean = |field: fn(&AudioFeatureSample) -> f64| {
            samples.iter().map(field).sum::<f64>() / count
        };

        Ok(Self {
            danceability: mean(|s| s.danceability),
            intensity: mean(|s| s.energy),
            euphoria: mean(|s| s.valence),
            acousticness: mean(|s| s.acousticness),
        })
    }
}

/// One labelled line of the mood report
#[derive(Clone, Debug, PartialEq)]
pub struct MoodRow {
    pub label: &'static str,
    pub percent: u8,
    /// Visual weight in `[MIN_INTENSITY, 1]`
    pub intensity: f64,
}

impl MoodRow {
    pub fn new(label: &'static str, value: f64) -> Self {
        Self {
            label,
            percent: (value * 100.0).round().clamp(0.0, 100.0) as u8,
            intensity: value.max(MIN_INTENSITY).min(1.0),
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}%", self.label, self.percent)
    }
}

/// What the results region shows after a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct MoodReport {
    pub title: String,
    pub rows: Vec<MoodRow>,
    pub track_count: usize,
}

impl MoodReport {
    pub fn new(summary: &MoodSummary, artist_name: &str, track_count: usize) -> Self {
        Self {
            title: format!("{}'s mood ring:", artist_name),
            rows: vec![
                MoodRow::new("Danceability", summary.danceability),
                MoodRow::new("Intensity", summary.intensity),
                MoodRow::new("Euphoria", summary.euphoria),
                MoodRow::new("Acousticness", summary.acousticness),
            ],
            track_count,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub search_input: String,
    pub search_enabled: bool,
    pub search_in_flight: bool,
    pub stored_token: Option<AccessToken>,
    pub error_message: Option<String>,
    pub report: Option<MoodReport>,
    pub results_visible: bool,
    pub show_help_popup: bool,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(danceability: f64, energy: f64, valence: f64, acousticness: f64) -> AudioFeatureSample {
        AudioFeatureSample { danceability, energy, valence, acousticness }
    }

    #[test]
    fn basic_authorization_encodes_id_and_secret() {
        let creds = Credentials::new("abc", "xyz");
        // base64("abc:xyz")
        assert_eq!(creds.basic_authorization(), "Basic YWJjOnh5eg==");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials::new("abc", "very-secret");
        let token = AccessToken::new("tok-123");
        assert!(!format!("{:?}", creds).contains("very-secret"));
        assert!(!format!("{:?}", token).contains("tok-123"));
    }

    #[test]
    fn summary_is_mean_of_each_field() {
        let samples = [
            sample(0.2, 0.4, 0.6, 0.8),
            sample(0.4, 0.6, 0.8, 1.0),
            sample(0.9, 0.2, 0.1, 0.0),
        ];
        let summary = MoodSummary::from_samples(&samples).unwrap();

        assert!((summary.danceability - 0.5).abs() < 1e-9);
        assert!((summary.intensity - 0.4).abs() < 1e-9);
        assert!((summary.euphoria - 0.5).abs() < 1e-9);
        assert!((summary.acousticness - 0.6).abs() < 1e-9);
    }

    #[test]
    fn summary_of_single_sample_is_that_sample() {
        let summary = MoodSummary::from_samples(&[sample(0.82, 0.5, 0.1, 0.05)]).unwrap();
        assert_eq!(summary.danceability, 0.82);
        assert_eq!(summary.intensity, 0.5);
        assert_eq!(summary.euphoria, 0.1);
        assert_eq!(summary.acousticness, 0.05);
    }

    #[test]
    fn summary_of_no_samples_fails() {
        assert_eq!(MoodSummary::from_samples(&[]), Err(MoodError::NoSamples));
    }

    #[test]
    fn report_rows_use_percent_and_floor_intensity() {
        let summary = MoodSummary {
            danceability: 0.82,
            intensity: 0.5,
            euphoria: 0.1,
            acousticness: 0.05,
        };
        let report = MoodReport::new(&summary, "Muse", 10);

        assert_eq!(report.title, "Muse's mood ring:");
        assert_eq!(report.rows[0].text(), "Danceability: 82%");
        assert_eq!(report.rows[0].intensity, 0.82);
        assert_eq!(report.rows[1].text(), "Intensity: 50%");
        assert_eq!(report.rows[2].text(), "Euphoria: 10%");
        assert_eq!(report.rows[2].intensity, MIN_INTENSITY);
        assert_eq!(report.rows[3].text(), "Acousticness: 5%");
        assert_eq!(report.rows[3].intensity, 0.3);
    }
}
