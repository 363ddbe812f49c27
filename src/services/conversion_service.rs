use std::sync::Arc;

use sqlx::SqlitePool;

use crate::dto::conversion_dto::ConversionRequest;
use crate::error::Result;
use crate::models::conversion::ConversionHistory;
use crate::services::rate_provider::RateProvider;
use crate::utils::time::now;

pub const HISTORY_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct ConversionService {
    pool: SqlitePool,
    rates: Arc<dyn RateProvider>,
}

impl ConversionService {
    pub fn new(pool: SqlitePool, rates: Arc<dyn RateProvider>) -> Self {
        Self { pool, rates }
    }

    /// Converts and records the result. Nothing is written unless the
    /// provider call (when needed) succeeded.
    pub async fn convert(&self, request: ConversionRequest) -> Result<ConversionHistory> {
        let result = if request.from_currency == request.to_currency {
            request.amount
        } else {
            self.rates
                .convert(request.amount, &request.from_currency, &request.to_currency)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        from = %request.from_currency,
                        to = %request.to_currency,
                        error = %e,
                        "Rate provider call failed"
                    );
                    e
                })?
        };

        let row = sqlx::query_as::<_, ConversionHistory>(
            r#"
            INSERT INTO conversion_history (amount, from_currency, to_currency, result, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, amount, from_currency, to_currency, result, timestamp
            "#,
        )
        .bind(request.amount)
        .bind(&request.from_currency)
        .bind(&request.to_currency)
        .bind(result)
        .bind(now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            from = %row.from_currency,
            to = %row.to_currency,
            amount = row.amount,
            result = row.result,
            "Conversion recorded"
        );
        Ok(row)
    }

    /// Most recent conversions first; equal timestamps fall back to insertion order.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ConversionHistory>> {
        let rows = sqlx::query_as::<_, ConversionHistory>(
            r#"
            SELECT id, amount, from_currency, to_currency, result, timestamp
            FROM conversion_history
            ORDER BY timestamp DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversion_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_test_pool;
    use crate::error::Error;
    use crate::services::rate_provider::MockRateProvider;
    use mockall::predicate::eq;
    use tokio_test::assert_ok;

    fn request(amount: f64, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest {
            amount,
            from_currency: from.to_string(),
            to_currency: to.to_string(),
        }
    }

    #[tokio::test]
    async fn same_currency_skips_provider() {
        let mut rates = MockRateProvider::new();
        rates.expect_convert().times(0);
        let service = ConversionService::new(create_test_pool().await.unwrap(), Arc::new(rates));

        let row = assert_ok!(service.convert(request(100.0, "USD", "USD")).await);
        assert_eq!(row.result, 100.0);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn different_currency_uses_provider_result() {
        let mut rates = MockRateProvider::new();
        rates
            .expect_convert()
            .with(eq(50.0), eq("USD"), eq("EUR"))
            .times(1)
            .returning(|_, _, _| Ok(46.5));
        let service = ConversionService::new(create_test_pool().await.unwrap(), Arc::new(rates));

        let row = service.convert(request(50.0, "USD", "EUR")).await.unwrap();
        assert_eq!(row.result, 46.5);
        assert_eq!(row.amount, 50.0);

        let recent = service.recent(HISTORY_LIMIT).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, row.id);
    }

    #[tokio::test]
    async fn provider_failure_writes_nothing() {
        let mut rates = MockRateProvider::new();
        rates
            .expect_convert()
            .returning(|_, _, _| Err(Error::Upstream("connection refused".into())));
        let service = ConversionService::new(create_test_pool().await.unwrap(), Arc::new(rates));

        let err = service.convert(request(5.0, "USD", "EUR")).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(ref msg) if msg == "connection refused"));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn recent_is_capped_and_newest_first() {
        let rates = MockRateProvider::new();
        let service = ConversionService::new(create_test_pool().await.unwrap(), Arc::new(rates));

        for i in 1..=12 {
            service
                .convert(request(i as f64, "CHF", "CHF"))
                .await
                .unwrap();
        }

        let recent = service.recent(HISTORY_LIMIT).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].amount, 12.0);
        assert!(recent
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp && pair[0].id > pair[1].id));
    }
}
