//! HTTP client for the voice-assistant upstream
//!
//! One GET per page, no retry, no caching. Transport failures and
//! malformed payloads map to distinct error variants so the handlers can
//! tell "no connectivity" from "the API changed shape under us".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, instrument};

use calldeck_core::config::UpstreamConfig;
use calldeck_core::models::{page, BatchPage, CallPage};
use calldeck_core::traits::CallDirectory;
use calldeck_core::{AppError, AppResult};

use crate::normalize::{normalize_batch, normalize_call};
use crate::raw::{RawBatchEnvelope, RawCallListEnvelope};

/// Client for the two read-only upstream endpoints
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client from configuration
    ///
    /// Extra headers from the config are attached to every request (the
    /// tunneling-host interstitial suppression lives here). Invalid header
    /// names or values are a configuration error, not a runtime surprise.
    pub fn new(config: UpstreamConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.extra_headers {
            let name: HeaderName = name
                .parse()
                .map_err(|_| AppError::Config(format!("invalid header name: {name}")))?;
            let value: HeaderValue = value
                .parse()
                .map_err(|_| AppError::Config(format!("invalid value for header {name}")))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, page: u64, page_size: u64) -> AppResult<T> {
        let response = self
            .http
            .get(url)
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "{url} answered with status {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl CallDirectory for UpstreamClient {
    #[instrument(skip(self))]
    async fn call_page(&self, page: u64, page_size: u64) -> AppResult<CallPage> {
        let url = format!("{}/getAllCallDetails", self.config.calls_base_url);
        debug!("Fetching call page {} (size {})", page, page_size);

        let envelope: RawCallListEnvelope = self.get_json(&url, page, page_size).await?;

        let details = envelope
            .call_details
            .ok_or_else(|| AppError::MalformedPayload("callDetails missing or not an array".to_string()))?;

        // The upstream does not always report a page count; derive one
        // from what came back, rounded up, like the original consumer did.
        let total_pages = envelope
            .total_pages
            .unwrap_or_else(|| page::total_pages(details.len() as u64, page_size));

        let records = details.iter().map(normalize_call).collect::<Vec<_>>();
        info!("Retrieved {} call records for page {}", records.len(), page);

        Ok(CallPage {
            page,
            total_pages,
            records,
        })
    }

    #[instrument(skip(self))]
    async fn batch_page(&self, page: u64, page_size: u64) -> AppResult<BatchPage> {
        let url = format!("{}/getOutboundCallDetails", self.config.batches_base_url);
        debug!("Fetching batch page {} (size {})", page, page_size);

        let envelope: RawBatchEnvelope = self.get_json(&url, page, page_size).await?;

        let raw_page = envelope.outbound_call_details.ok_or_else(|| {
            AppError::MalformedPayload("outboundCallDetails missing".to_string())
        })?;

        let total_pages = page::total_pages(
            raw_page
                .total_documents
                .unwrap_or(raw_page.batches.len() as u64),
            page_size,
        );

        let batches = raw_page.batches.iter().map(normalize_batch).collect::<Vec<_>>();
        info!("Retrieved {} batches for page {}", batches.len(), page);

        Ok(BatchPage {
            page,
            total_pages,
            batches,
        })
    }
}
