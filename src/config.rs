use std::env;
use std::time::Duration;

use crate::model::Credentials;

pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_MARKET: &str = "us";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Base URL of the token endpoint host
    pub accounts_url: String,
    /// Base URL of the Web API host
    pub api_url: String,
    /// Market used for the top-tracks lookup
    pub market: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = required(&lookup, "CLIENT_ID")?;
        let client_secret = required(&lookup, "CLIENT_SECRET")?;

        let http_timeout_secs = match lookup("MOOD_RING_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    anyhow::anyhow!("MOOD_RING_HTTP_TIMEOUT_SECS must be a whole number of seconds: {}", e)
                })?;
                if secs == 0 {
                    return Err(anyhow::anyhow!(
                        "MOOD_RING_HTTP_TIMEOUT_SECS must be at least 1 second"
                    ));
                }
                secs
            }
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Config {
            credentials: Credentials::new(client_id, client_secret),
            accounts_url: base_url(&lookup, "SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL),
            api_url: base_url(&lookup, "SPOTIFY_API_URL", DEFAULT_API_URL),
            market: lookup("MOOD_RING_MARKET")
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MARKET.to_string()),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(anyhow::anyhow!(
            "{} environment variable must be set (see your Spotify developer dashboard)",
            name
        )),
    }
}

fn base_url<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let config = config_from(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "secret")]).unwrap();

        assert_eq!(config.credentials, Credentials::new("id", "secret"));
        assert_eq!(config.accounts_url, DEFAULT_ACCOUNTS_URL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.market, "us");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_credentials_name_the_variable() {
        let err = config_from(&[("CLIENT_SECRET", "secret")]).unwrap_err();
        assert!(err.to_string().contains("CLIENT_ID"));

        let err = config_from(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "  ")]).unwrap_err();
        assert!(err.to_string().contains("CLIENT_SECRET"));
    }

    #[test]
    fn overrides_are_normalized() {
        let config = config_from(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("SPOTIFY_API_URL", " http://127.0.0.1:9000/ "),
            ("MOOD_RING_MARKET", "GB"),
            ("MOOD_RING_HTTP_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.market, "gb");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_or_garbage_timeout_is_rejected() {
        let err = config_from(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("MOOD_RING_HTTP_TIMEOUT_SECS", "0"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("MOOD_RING_HTTP_TIMEOUT_SECS"));

        let err = config_from(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("MOOD_RING_HTTP_TIMEOUT_SECS", "soon"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("MOOD_RING_HTTP_TIMEOUT_SECS"));
    }
}
