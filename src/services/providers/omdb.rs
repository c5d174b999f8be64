use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::OmdbTitle,
    services::providers::MetadataProvider,
};

/// OMDb API provider
///
/// Fetches posters and IMDb ratings through OMDb's title-search endpoint
/// (`GET /?t=<title>&apikey=<key>`). OMDb matches on free-text title, not
/// a stable identifier, so a mismatched title may return wrong or empty
/// metadata. That is an accepted provider limitation; this module only
/// guarantees graceful degradation to the sentinels.
#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// One title lookup against OMDb. Errors here are internal to the
    /// provider; the trait methods map them to sentinels.
    async fn lookup(&self, title: &str) -> AppResult<OmdbTitle> {
        let url = format!("{}/", self.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let payload: OmdbTitle = response.json().await?;

        if !payload.found() {
            tracing::debug!(
                title = %title,
                error = payload.error.as_deref().unwrap_or("unknown"),
                provider = "omdb",
                "Title not recognized by provider"
            );
        }

        Ok(payload)
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch_poster(&self, title: &str) -> Option<String> {
        match self.lookup(title).await {
            Ok(payload) => payload.poster_url(),
            Err(e) => {
                tracing::warn!(
                    title = %title,
                    error = %e,
                    provider = "omdb",
                    "Poster lookup failed, degrading to no poster"
                );
                None
            }
        }
    }

    async fn fetch_rating(&self, title: &str) -> f64 {
        match self.lookup(title).await {
            Ok(payload) => payload.rating(),
            Err(e) => {
                tracing::warn!(
                    title = %title,
                    error = %e,
                    provider = "omdb",
                    "Rating lookup failed, degrading to 0.0"
                );
                0.0
            }
        }
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
