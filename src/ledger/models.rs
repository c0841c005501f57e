//! Ledger data models
//!
//! Three row types backing the ledger: [`Organization`] owns the running
//! balance, [`Payment`] is the immutable record keyed by the external
//! operation id, and [`BalanceLog`] is the append-only audit trail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Payer organization and its running balance
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Organization {
    pub id: i64,
    /// Opaque unique payer key, never mutated
    pub inn: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every balance mutation
    pub updated_at: DateTime<Utc>,
}

/// A recorded bank payment, immutable once created.
///
/// `operation_id` is the idempotency key: at most one row per id, permanently.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub operation_id: Uuid,
    pub amount: Decimal,
    pub payer_inn: String,
    pub document_number: String,
    pub document_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Before/after balance snapshot, written in the same transaction as the
/// payment it references. `payment_id` is a weak reference and goes NULL if
/// the payment row is ever removed; the log entry itself is never deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BalanceLog {
    pub id: i64,
    pub organization_id: i64,
    pub payment_id: Option<i64>,
    pub amount: Decimal,
    pub previous_balance: Decimal,
    pub new_balance: Decimal,
    pub created_at: DateTime<Utc>,
}
