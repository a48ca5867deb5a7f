use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use crate::config::Config;

use super::{GrammarChecker, GrammarResponse};

/// Grammar checker backed by the TextGears `/grammar` endpoint.
pub struct TextGearsClient {
    api_key: String,
    endpoint: String,
    language: String,
    client: reqwest::Client,
}

impl TextGearsClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            language: language.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.endpoint, &config.language)
    }

    /// Full request URL for `text`, with every parameter percent-encoded.
    pub fn request_url(&self, text: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.endpoint,
            [
                ("key", self.api_key.as_str()),
                ("text", text),
                ("language", self.language.as_str()),
            ],
        )
        .with_context(|| format!("invalid TextGears endpoint: {}", self.endpoint))
    }
}

#[async_trait]
impl GrammarChecker for TextGearsClient {
    async fn check(&self, text: &str) -> Result<GrammarResponse> {
        let url = self.request_url(text)?;
        info!(text, endpoint = %self.endpoint, "checking grammar");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call TextGears")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("TextGears API error ({}): {}", status, body);
        }

        let result: GrammarResponse = resp
            .json()
            .await
            .context("failed to decode TextGears response")?;
        debug!(
            status = result.status,
            errors = result.response.errors.len(),
            "grammar check done"
        );
        Ok(result)
    }
}
