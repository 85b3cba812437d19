//! Newsletter publishing: drafts only, never scheduled sends.

use backon::{ExponentialBuilder, Retryable};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use crate::config::PublisherConfig;
use crate::error::PublishError;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    pub id: String,
}

#[async_trait::async_trait]
pub trait Publisher {
    /// Create the report as an unpublished draft for manual review.
    async fn publish_draft(&self, report: &Report) -> Result<PublishReceipt, PublishError>;
}

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    publication_id: &'a str,
    title: &'a str,
    content: &'a str,
    status: &'static str,
    send_at: Option<String>,
}

/// Beehiiv posts API client.
pub struct BeehiivPublisher {
    config: PublisherConfig,
    client: reqwest::Client,
    max_retries: usize,
}

impl BeehiivPublisher {
    pub fn new(config: PublisherConfig) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: PublisherConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            max_retries: 2,
        }
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn posts_url(&self) -> Result<Url, PublishError> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| PublishError::Config(format!("unusable api url {}", self.config.api_url)))?
            .pop_if_empty()
            .extend(["v2", "posts"]);
        Ok(url)
    }

    async fn send_once(&self, report: &Report) -> Result<PublishReceipt, PublishError> {
        let payload = CreatePostRequest {
            publication_id: &self.config.publication_id,
            title: &report.title,
            content: &report.html,
            status: "draft",
            send_at: None,
        };

        let response = self
            .client
            .post(self.posts_url()?)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 && status != 201 {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Status { status, body });
        }

        let body: Value = response.json().await?;
        let id = body
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();

        Ok(PublishReceipt { id })
    }
}

#[async_trait::async_trait]
impl Publisher for BeehiivPublisher {
    async fn publish_draft(&self, report: &Report) -> Result<PublishReceipt, PublishError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_times(self.max_retries);

        let receipt = (|| self.send_once(report))
            .retry(backoff)
            .when(PublishError::is_transient)
            .notify(|err: &PublishError, delay: Duration| {
                warn!(error = %err, delay_ms = delay.as_millis() as u64, "BeehiivPublisher: retrying draft creation");
            })
            .await?;

        info!(post_id = %receipt.id, title = %report.title, "BeehiivPublisher: draft created");
        Ok(receipt)
    }
}
