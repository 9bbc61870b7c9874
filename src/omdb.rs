use reqwest::Url;
use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as _};
use std::time::Duration;

use crate::config::Config;
use crate::data_models::{MovieRecord, SearchResult, UpstreamEnvelope};
use crate::error::ProxyError;

/// Thin client for the OMDB HTTP API.
///
/// One instance is shared by every request; `reqwest::Client` pools
/// connections internally and is safe to use concurrently.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: Url, api_key: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.omdb_base_url.clone(),
            config.omdb_api_key.clone(),
            config.request_timeout,
        )
    }

    /// Exact-title lookup: `?apikey=..&t=..[&y=..]`.
    pub fn lookup_url(&self, title: &str, year: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apikey", &self.api_key);
            query.append_pair("t", title);
            if let Some(year) = year {
                query.append_pair("y", year);
            }
        }
        url
    }

    /// Keyword search: `?apikey=..&s=..`.
    pub fn search_url(&self, keyword: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("s", keyword);
        url
    }

    pub async fn lookup(&self, title: &str, year: Option<&str>) -> Result<MovieRecord, ProxyError> {
        let url = self.lookup_url(title, year);
        self.fetch(url).await
    }

    pub async fn search(&self, keyword: &str) -> Result<SearchResult, ProxyError> {
        let url = self.search_url(keyword);
        self.fetch(url).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProxyError> {
        // never log the query string, it carries the api key
        let target = format!("{}{}", url.host_str().unwrap_or_default(), url.path());
        tracing::debug!("GET {target}");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProxyError::UpstreamUnreachable(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!("{target} responded with {status}");
            return Err(ProxyError::UpstreamStatus(status));
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| ProxyError::ResponseReadError(e.without_url()))?;

        decode_body(&body)
    }
}

/// Decodes an OMDB body. A `"Response":"False"` envelope carries no movie
/// data and is reported as a `DecodeError`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ProxyError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    let envelope = UpstreamEnvelope::deserialize(&value)?;
    if envelope.is_miss() {
        let reason = envelope.error.as_deref().unwrap_or("no reason given");
        tracing::info!("OMDB reported a miss: {reason}");
        return Err(ProxyError::DecodeError(serde_json::Error::custom(format!(
            "OMDB reported a miss: {reason}"
        ))));
    }

    Ok(serde_json::from_value(value)?)
}
