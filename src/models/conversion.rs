use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One completed conversion. Rows are written once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConversionHistory {
    pub id: i64,
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}
