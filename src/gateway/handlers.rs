//! HTTP handlers: webhook ingestion, balance query, health check

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::state::AppState;
use super::types::{
    BankWebhookRequest, ErrorDetail, HealthResponse, OrganizationBalanceResponse,
};
use crate::ledger::{OrganizationRepository, PaymentError, PaymentNotification};

/// Bank payment webhook
///
/// POST /api/webhook/bank
///
/// Returns 200 with an empty body for both first-time and duplicate
/// deliveries: the upstream notifier retries on anything else, and the
/// idempotency key makes at-least-once redelivery safe.
#[utoipa::path(
    post,
    path = "/api/webhook/bank",
    request_body = BankWebhookRequest,
    responses(
        (status = 200, description = "Notification accepted (first delivery or duplicate)"),
        (status = 400, description = "Validation failure", body = ErrorDetail),
        (status = 500, description = "Storage failure, safe to redeliver", body = ErrorDetail)
    ),
    tag = "Webhook"
)]
pub async fn bank_webhook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BankWebhookRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorDetail>)> {
    let notification: PaymentNotification = req.into();

    match state.payments.process_payment(&notification).await {
        Ok(_) => Ok(StatusCode::OK),
        Err(e) => {
            let status = match &e {
                PaymentError::InvalidAmount | PaymentError::InvalidInn(_) => {
                    StatusCode::BAD_REQUEST
                }
                PaymentError::Database(_) => {
                    tracing::error!(
                        operation_id = %notification.operation_id,
                        "Webhook processing failed: {:?}",
                        e
                    );
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((status, Json(ErrorDetail::new(e.to_string()))))
        }
    }
}

/// Organization balance query
///
/// GET /api/organizations/{inn}/balance
#[utoipa::path(
    get,
    path = "/api/organizations/{inn}/balance",
    params(
        ("inn" = String, Path, description = "Payer INN")
    ),
    responses(
        (status = 200, description = "Current balance", body = OrganizationBalanceResponse),
        (status = 404, description = "Organization not found", body = ErrorDetail)
    ),
    tag = "Organizations"
)]
pub async fn organization_balance(
    State(state): State<Arc<AppState>>,
    Path(inn): Path<String>,
) -> Result<Json<OrganizationBalanceResponse>, (StatusCode, Json<ErrorDetail>)> {
    let org = OrganizationRepository::get_by_inn(state.db.pool(), &inn)
        .await
        .map_err(|e| {
            tracing::error!("Balance query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(e.to_string())),
            )
        })?;

    match org {
        Some(org) => Ok(Json(OrganizationBalanceResponse {
            inn: org.inn,
            balance: org.balance,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorDetail::new("Organization not found")),
        )),
    }
}

/// Health check endpoint
///
/// GET /api/v1/health
///
/// One PostgreSQL round-trip per call; 503 when the store is unreachable.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                timestamp_ms,
            }),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    timestamp_ms,
                }),
            )
        }
    }
}
