use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{EstimationOutcome, ScoredExperience},
    protocol::{
        CompareRequest, CompareResponse, EstimateRequest, EstimateResponse, COMPARE_PATH,
        ESTIMATE_PATH,
    },
};
use tracing::debug;

use crate::config::ClientConfig;

/// The ranking backend the workflow talks to.
#[async_trait]
pub trait EstimatorBackend: Send + Sync {
    async fn estimate(&self, request: EstimateRequest) -> Result<EstimationOutcome>;
    async fn compare(&self, request: CompareRequest) -> Result<ScoredExperience>;
}

pub struct HttpBackend {
    http: Client,
    estimate_url: String,
    compare_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            estimate_url: config.endpoint(ESTIMATE_PATH),
            compare_url: config.endpoint(COMPARE_PATH),
        })
    }
}

#[async_trait]
impl EstimatorBackend for HttpBackend {
    async fn estimate(&self, request: EstimateRequest) -> Result<EstimationOutcome> {
        debug!(url = %self.estimate_url, chars = request.text.chars().count(), "posting estimate");
        let res = self
            .http
            .post(&self.estimate_url)
            .json(&request)
            .send()
            .await
            .context("estimate request could not be sent")?
            .error_for_status()
            .context("estimate request rejected")?;
        let body: EstimateResponse = res
            .json()
            .await
            .context("malformed estimate response")?;
        Ok(body.into())
    }

    async fn compare(&self, request: CompareRequest) -> Result<ScoredExperience> {
        debug!(
            url = %self.compare_url,
            experience_id = request.experience_id.0,
            choice = request.choice().as_str(),
            "posting comparison"
        );
        let res = self
            .http
            .post(&self.compare_url)
            .json(&request)
            .send()
            .await
            .context("compare request could not be sent")?
            .error_for_status()
            .context("compare request rejected")?;
        let body: CompareResponse = res
            .json()
            .await
            .context("malformed compare response")?;
        Ok(body)
    }
}
