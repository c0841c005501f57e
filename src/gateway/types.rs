//! Gateway request/response types
//!
//! Wire shapes mirror what the upstream bank notifier and balance consumers
//! already expect; changing them is a breaking change for both.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ledger::PaymentNotification;

// ============================================================================
// Requests
// ============================================================================

/// Bank payment notification body
///
/// Deserialization enforces field presence and types (UUID format, decimal
/// parseability, timestamp format); positivity and INN format are enforced
/// by the processor before any storage work.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BankWebhookRequest {
    /// Externally supplied idempotency key
    pub operation_id: Uuid,
    /// Payment amount, decimal string with 2 fractional digits
    #[schema(value_type = String, example = "500.00")]
    pub amount: Decimal,
    #[schema(example = "1234567890")]
    pub payer_inn: String,
    #[schema(example = "PAY-20260804-001")]
    pub document_number: String,
    pub document_date: DateTime<Utc>,
}

impl From<BankWebhookRequest> for PaymentNotification {
    fn from(req: BankWebhookRequest) -> Self {
        PaymentNotification {
            operation_id: req.operation_id,
            amount: req.amount,
            payer_inn: req.payer_inn,
            document_number: req.document_number,
            document_date: req.document_date,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Current balance for one organization
#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationBalanceResponse {
    #[schema(example = "1234567890")]
    pub inn: String,
    /// Serialized as a decimal string, e.g. "1500.00"
    #[schema(value_type = String, example = "1500.00")]
    pub balance: Decimal,
}

/// Error body shared by all 4xx/5xx responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "Organization not found")]
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_webhook_request_deserializes_decimal_string() {
        let body = r#"{
            "operation_id": "ccf0a86d-041b-4991-bcf7-e2352f7b8a4a",
            "amount": "145000.00",
            "payer_inn": "1234567890",
            "document_number": "PAY-328",
            "document_date": "2024-04-27T21:00:00Z"
        }"#;

        let req: BankWebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.amount, Decimal::from_str("145000.00").unwrap());
        assert_eq!(req.payer_inn, "1234567890");
        assert_eq!(
            req.operation_id.to_string(),
            "ccf0a86d-041b-4991-bcf7-e2352f7b8a4a"
        );
    }

    #[test]
    fn test_webhook_request_rejects_missing_field() {
        let body = r#"{
            "operation_id": "ccf0a86d-041b-4991-bcf7-e2352f7b8a4a",
            "amount": "145000.00",
            "payer_inn": "1234567890"
        }"#;

        assert!(serde_json::from_str::<BankWebhookRequest>(body).is_err());
    }

    #[test]
    fn test_webhook_request_rejects_bad_uuid() {
        let body = r#"{
            "operation_id": "not-a-uuid",
            "amount": "1.00",
            "payer_inn": "1234567890",
            "document_number": "PAY-1",
            "document_date": "2024-04-27T21:00:00Z"
        }"#;

        assert!(serde_json::from_str::<BankWebhookRequest>(body).is_err());
    }

    #[test]
    fn test_balance_response_serializes_balance_as_string() {
        let resp = OrganizationBalanceResponse {
            inn: "1234567890".to_string(),
            balance: Decimal::from_str("1500.00").unwrap(),
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"inn": "1234567890", "balance": "1500.00"})
        );
    }

    #[test]
    fn test_error_detail_shape() {
        let json = serde_json::to_value(ErrorDetail::new("Organization not found")).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Organization not found"}));
    }
}
