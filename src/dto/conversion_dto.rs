use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::conversion::ConversionHistory;
use crate::utils::time::to_rfc3339;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConvertPayload {
    #[serde(default)]
    #[validate(required(message = "Missing required fields"))]
    pub amount: Option<f64>,
    #[serde(default, rename = "from")]
    #[validate(
        required(message = "Missing required fields"),
        length(min = 1, message = "Missing required fields")
    )]
    pub from_currency: Option<String>,
    #[serde(default, rename = "to")]
    #[validate(
        required(message = "Missing required fields"),
        length(min = 1, message = "Missing required fields")
    )]
    pub to_currency: Option<String>,
}

/// A payload that passed validation, with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

impl ConvertPayload {
    /// Zero counts as a missing amount, matching the front end's truthiness check.
    pub fn into_request(self) -> Option<ConversionRequest> {
        match (self.amount, self.from_currency, self.to_currency) {
            (Some(amount), Some(from), Some(to))
                if amount != 0.0 && !from.is_empty() && !to.is_empty() =>
            {
                Some(ConversionRequest {
                    amount,
                    from_currency: from,
                    to_currency: to,
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub converted_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionHistoryResponse {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub result: f64,
    /// ISO-8601, UTC.
    pub timestamp: String,
}

impl From<ConversionHistory> for ConversionHistoryResponse {
    fn from(row: ConversionHistory) -> Self {
        Self {
            amount: row.amount,
            from_currency: row.from_currency,
            to_currency: row.to_currency,
            result: row.result,
            timestamp: to_rfc3339(row.timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(amount: Option<f64>, from: Option<&str>, to: Option<&str>) -> ConvertPayload {
        ConvertPayload {
            amount,
            from_currency: from.map(str::to_string),
            to_currency: to.map(str::to_string),
        }
    }

    #[test]
    fn zero_amount_is_treated_as_missing() {
        let p = payload(Some(0.0), Some("USD"), Some("EUR"));
        assert!(p.validate().is_ok());
        assert_eq!(p.into_request(), None);
    }

    #[test]
    fn negative_amount_is_accepted() {
        let req = payload(Some(-12.5), Some("USD"), Some("EUR"))
            .into_request()
            .expect("request");
        assert_eq!(req.amount, -12.5);
    }

    #[test]
    fn empty_currency_fails_validation() {
        let p = payload(Some(10.0), Some(""), Some("EUR"));
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("from_currency"));
    }

    #[test]
    fn wire_names_are_from_and_to() {
        let p: ConvertPayload =
            serde_json::from_str(r#"{"amount": 5, "from": "GBP", "to": "JPY"}"#).unwrap();
        assert_eq!(p.from_currency.as_deref(), Some("GBP"));
        assert_eq!(p.to_currency.as_deref(), Some("JPY"));
        assert_eq!(p.amount, Some(5.0));
    }
}
