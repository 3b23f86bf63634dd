use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;

use crate::api::error::ApiError;
use crate::api::types::SearchResponse;
use crate::config::ApiConfig;

/// Future returned by [`ImageClient::search`].
pub type SearchFuture = Pin<Box<dyn Future<Output = Result<SearchResponse, ApiError>> + Send>>;

/// Seam between the fetch coordinator and the HTTP layer.
///
/// Tests substitute a scripted client; production uses [`HttpImageClient`].
pub trait ImageClient: Send + Sync {
    /// Fetch one page of results for a category.
    fn search(&self, category: &str, page: u32) -> SearchFuture;
}

/// `reqwest`-backed client for the image-search service.
pub struct HttpImageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpImageClient {
    /// Build the client from config. The API key is read from the
    /// configured environment variable once, at construction.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        let api_key = std::env::var(&config.key_env_var)
            .ok()
            .filter(|key| !key.is_empty());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl ImageClient for HttpImageClient {
    fn search(&self, category: &str, page: u32) -> SearchFuture {
        let url = format!("{}/images", self.base_url);
        let client = self.client.clone();
        let mut query = vec![
            ("category".to_string(), category.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        if let Some(key) = &self.api_key {
            query.push(("key".to_string(), key.clone()));
        }

        Box::pin(async move {
            let response = client.get(&url).query(&query).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url,
                });
            }
            response
                .json::<SearchResponse>()
                .await
                .map_err(ApiError::MalformedBody)
        })
    }
}
