use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Source of converted amounts for currency pairs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns `amount` expressed in `to`, as quoted by the provider.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64>;
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

/// Client for the Frankfurter API (`GET /latest?amount=&from=&to=`).
#[derive(Clone)]
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
}

impl FrankfurterClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for FrankfurterClient {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/latest", self.base_url);
        tracing::debug!(%url, amount, from, to, "Requesting rate");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("amount", amount.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "rate provider returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: LatestResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Upstream(format!("malformed rate provider response: {}", e)))?;
        parsed
            .rates
            .get(to)
            .copied()
            .ok_or_else(|| Error::Upstream(format!("rate provider returned no rate for {}", to)))
    }
}
