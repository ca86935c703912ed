use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

pub struct HttpFetcher {
    http_client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    pub fn try_with_config(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http_client.get(url).send().await?;
        debug!("GET {} -> {}", url, response.status());

        let body = response.error_for_status()?.bytes().await?;
        debug!("Read {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }
}
