use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Credential and transport settings for [`crate::TmdbClient`].
///
/// Loaded once at startup and handed to the client; nothing in the request
/// path reads the environment.
#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Reads `TMDB_API_KEY`, `TMDB_BASE_URL` and `TMDB_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("TMDB_API_KEY not set"))?;
        let mut config = Self::new(api_key);

        if let Some(raw) = lookup("TMDB_BASE_URL").filter(|s| !s.is_empty()) {
            config.base_url = Url::parse(&raw)
                .with_context(|| format!("TMDB_BASE_URL is not a valid URL: {raw}"))?;
        }
        if let Some(raw) = lookup("TMDB_TIMEOUT_SECS").filter(|s| !s.is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("TMDB_TIMEOUT_SECS must be a number of seconds: {raw}"))?;
            if secs == 0 {
                anyhow::bail!("TMDB_TIMEOUT_SECS must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = TmdbConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("TMDB_API_KEY"));
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        assert!(TmdbConfig::from_lookup(lookup(&[("TMDB_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = TmdbConfig::from_lookup(lookup(&[("TMDB_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url.as_str(), "https://api.themoviedb.org/3");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn overrides_are_read() {
        let config = TmdbConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("TMDB_BASE_URL", "http://localhost:8080/3"),
            ("TMDB_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/3");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let bad_url = TmdbConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("TMDB_BASE_URL", "not a url"),
        ]));
        assert!(bad_url.is_err());

        let zero = TmdbConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("TMDB_TIMEOUT_SECS", "0"),
        ]));
        assert!(zero.is_err());

        let nan = TmdbConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("TMDB_TIMEOUT_SECS", "soon"),
        ]));
        assert!(nan.is_err());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let rendered = format!("{:?}", TmdbConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
