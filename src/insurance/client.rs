// src/insurance/client.rs

use crate::insurance::models::RATE_PERIOD;
use crate::insurance::{InsuranceError, InsuranceEstimate, RateQuery};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// External insurance-rate service.
pub trait RateLookup: Send + Sync {
    fn lookup(&self, query: &RateQuery) -> Result<InsuranceEstimate, InsuranceError>;
}

/// Used when no partner key is configured; every lookup degrades to 0.
pub struct DisabledRateLookup;

impl RateLookup for DisabledRateLookup {
    fn lookup(&self, _query: &RateQuery) -> Result<InsuranceEstimate, InsuranceError> {
        Err(InsuranceError::NotConfigured)
    }
}

pub struct HonestPolicyClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HonestPolicyClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InsuranceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InsuranceError::Request(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    fn estimates_url(&self) -> String {
        format!("{}/get_estimates", self.base_url.trim_end_matches('/'))
    }
}

impl RateLookup for HonestPolicyClient {
    fn lookup(&self, query: &RateQuery) -> Result<InsuranceEstimate, InsuranceError> {
        let params = [
            ("key", self.api_key.as_str()),
            ("zip", query.zip.as_str()),
            ("sqft", query.sqft.as_str()),
            ("est", query.est.as_str()),
            ("pid", query.pid.as_str()),
            ("year", query.year.as_str()),
            ("per", RATE_PERIOD),
        ];

        let resp = self
            .client
            .get(self.estimates_url())
            .query(&params)
            .send()
            .map_err(|e| InsuranceError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InsuranceError::Status(status.as_u16()));
        }

        let estimate: InsuranceEstimate = resp
            .json()
            .map_err(|e| InsuranceError::Decode(e.to_string()))?;

        if !estimate.errors.is_empty() {
            return Err(InsuranceError::Api(estimate.errors));
        }

        debug!(rate = estimate.rate, per = %estimate.per, "insurance estimate received");
        Ok(estimate)
    }
}
