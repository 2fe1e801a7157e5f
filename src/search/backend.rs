//! The remote flight search endpoint

use crate::config::Config;
use crate::error::{ActionFailure, ActionResult, ConfigError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// A service that runs one flight search and answers with text
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run a single search and return the response body
    async fn search(&self) -> ActionResult<String>;

    /// Human readable target, used in logs and the UI footer
    fn describe(&self) -> String;
}

/// `POST`s to the configured search endpoint with an empty body
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    url: Url,
}

impl HttpSearchBackend {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.search_url()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self) -> ActionResult<String> {
        tracing::debug!("POST {}", self.url);

        let response = self.client.post(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ActionFailure::bad_status(status.as_u16()));
        }

        // reqwest reports body read failures as decode errors, but a short or
        // reset body is a transport failure.
        let body = response
            .bytes()
            .await
            .map_err(|e| ActionFailure::unreachable(e.to_string()))?;
        let text = String::from_utf8(body.to_vec())
            .map_err(|e| ActionFailure::malformed_body(e.to_string()))?;

        tracing::debug!("Search returned {} bytes", text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("POST {}", self.url)
    }
}
