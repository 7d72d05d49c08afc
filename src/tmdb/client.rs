use anyhow::Context;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::endpoint::{Endpoint, QueryValue};
use crate::config::TmdbConfig;
use crate::error::{FetchCause, Result};

/// Query key TMDB reads the v3 API key from.
pub const API_KEY_PARAM: &str = "api_key";

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> anyhow::Result<Self> {
        let user_agent = format!("tmdb-gateway/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build TMDB HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(TmdbConfig::from_env()?)
    }

    /// Issues one GET for `endpoint` and returns the decoded JSON body as is.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        match self.get_json(endpoint).await {
            Ok(value) => Ok(value),
            Err(err) => {
                error!(path = endpoint.path(), "Request failed: {}", err.cause());
                Err(err)
            }
        }
    }

    /// Same as [`fetch`](Self::fetch) for ad-hoc paths not covered by an
    /// endpoint function.
    pub async fn get(&self, path: &str, params: &[(&str, QueryValue)]) -> Result<Value> {
        let endpoint = params
            .iter()
            .fold(Endpoint::new(path), |e, (k, v)| e.param(*k, v.clone()));
        self.fetch(&endpoint).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Credential first, then the caller's parameters in order. A caller
    /// parameter named `api_key` is dropped so it cannot replace the key.
    fn query(&self, endpoint: &Endpoint) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(endpoint.params().len() + 1);
        query.push((API_KEY_PARAM.to_string(), self.api_key.clone()));
        for (name, value) in endpoint.params() {
            if name == API_KEY_PARAM {
                debug!(path = endpoint.path(), "Ignoring caller-supplied api_key parameter");
                continue;
            }
            query.push((name.clone(), value.to_string()));
        }
        query
    }

    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value> {
        let url = self.url(endpoint.path());
        let query = self.query(endpoint);
        debug!(
            url = %url,
            params = ?endpoint.params().iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "TMDB request"
        );

        let res = self.client.get(&url).query(&query).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(FetchCause::Status { status, body: text }.into());
        }
        let parsed: Value = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}
