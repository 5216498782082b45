use crate::config::DEFAULT_SERVER_URL;
use crate::server::SEARCH_PATH;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Sends a query to the search endpoint and returns the raw response text.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn post_query(&self, query: &str) -> Result<String>;
}

/// `POST {base}/api/search` over HTTP.
///
/// The query goes out as a `text/plain` body without any escaping. The
/// response status and content type are not checked; whatever text comes back
/// is handed to the caller.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", normalize_base_url(base_url), SEARCH_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn post_query(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(query.to_owned())
            .send()
            .await?;

        tracing::debug!("{} answered {}", self.endpoint, response.status());
        Ok(response.text().await?)
    }
}

/// Adds a scheme when missing and drops trailing slashes.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return DEFAULT_SERVER_URL.to_string();
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
