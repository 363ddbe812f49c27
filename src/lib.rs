pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{
    conversion_service::ConversionService,
    rate_provider::{FrankfurterClient, RateProvider},
    user_service::UserService,
};
use reqwest::Client;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub conversion_service: ConversionService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.rate_provider_timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;
        let rates = FrankfurterClient::new(config.rate_provider_url.clone(), http_client);
        Ok(Self::with_rate_provider(pool, Arc::new(rates)))
    }

    pub fn with_rate_provider(pool: SqlitePool, rates: Arc<dyn RateProvider>) -> Self {
        let user_service = UserService::new(pool.clone());
        let conversion_service = ConversionService::new(pool.clone(), rates);

        Self {
            pool,
            user_service,
            conversion_service,
        }
    }
}
