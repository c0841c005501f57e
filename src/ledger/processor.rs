//! Payment processor: applies bank notifications to organization balances
//! exactly once, atomically, with an audit record per applied payment.
//!
//! Concurrency discipline:
//! - duplicate deliveries of one `operation_id` serialize on the unique
//!   index of `payments.operation_id` (check and insert are one statement);
//! - concurrent payments to one organization serialize on a `FOR UPDATE`
//!   row lock before the balance read-modify-write.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::error::PaymentError;
use super::models::Organization;
use super::store::Database;
use super::validation::Inn;

/// A bank payment notification, shape-validated by the transport layer
#[derive(Debug, Clone)]
pub struct PaymentNotification {
    /// Externally supplied idempotency key
    pub operation_id: Uuid,
    pub amount: Decimal,
    pub payer_inn: String,
    pub document_number: String,
    pub document_date: DateTime<Utc>,
}

impl PaymentNotification {
    /// Check the business rules the transport cannot express: the amount
    /// must be strictly positive and the payer INN well-formed. Returns the
    /// validated INN. No storage work happens before this passes.
    pub fn validate(&self) -> Result<Inn, PaymentError> {
        if self.amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount);
        }
        Ok(Inn::new(&self.payer_inn)?)
    }
}

/// Outcome of processing a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentOutcome {
    /// true if this call created the payment and moved the balance,
    /// false if the operation_id had already been applied
    pub applied: bool,
}

pub struct PaymentService {
    db: Arc<Database>,
}

impl PaymentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Apply a payment notification to the payer's balance exactly once.
    ///
    /// All writes happen in a single transaction: the payment row, the
    /// organization balance update, and the balance log entry are visible
    /// together or not at all. Re-invoking with the same `operation_id`,
    /// sequentially or concurrently, leaves exactly one payment, one log
    /// entry, and one balance increment behind.
    pub async fn process_payment(
        &self,
        notification: &PaymentNotification,
    ) -> Result<PaymentOutcome, PaymentError> {
        let inn = notification.validate()?;

        let mut tx = self.db.pool().begin().await?;

        // The payer row must exist before the payment insert (payer_inn FK).
        // ON CONFLICT makes concurrent first payments for a new inn safe.
        sqlx::query(
            r#"
            INSERT INTO organizations (inn, balance)
            VALUES ($1, 0)
            ON CONFLICT (inn) DO NOTHING
            "#,
        )
        .bind(inn.as_str())
        .execute(&mut *tx)
        .await?;

        // Claim the operation_id. Existence check and insert are one
        // statement: a concurrent duplicate blocks on the uncommitted
        // unique-index entry until the winner commits, then resolves to
        // DO NOTHING and fetches no row here.
        let payment_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO payments (operation_id, amount, payer_inn, document_number, document_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (operation_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(notification.operation_id)
        .bind(notification.amount)
        .bind(inn.as_str())
        .bind(&notification.document_number)
        .bind(notification.document_date)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(payment_id) = payment_id else {
            // Duplicate delivery: discard the transaction (including the
            // no-op organization upsert) and acknowledge without side effects.
            tx.rollback().await?;
            tracing::info!(
                operation_id = %notification.operation_id,
                "Payment already processed, skipping"
            );
            return Ok(PaymentOutcome { applied: false });
        };

        // Lock the organization row: concurrent payments to the same payer
        // serialize here, so previous_balance can never be stale.
        let org_row = sqlx::query("SELECT id, balance FROM organizations WHERE inn = $1 FOR UPDATE")
            .bind(inn.as_str())
            .fetch_one(&mut *tx)
            .await?;
        let organization_id: i64 = org_row.get("id");
        let previous_balance: Decimal = org_row.get("balance");
        let new_balance = previous_balance + notification.amount;

        sqlx::query("UPDATE organizations SET balance = $1, updated_at = NOW() WHERE id = $2")
            .bind(new_balance)
            .bind(organization_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO balance_logs (organization_id, payment_id, amount, previous_balance, new_balance)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(organization_id)
        .bind(payment_id)
        .bind(notification.amount)
        .bind(previous_balance)
        .bind(new_balance)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            operation_id = %notification.operation_id,
            inn = %inn,
            %previous_balance,
            %new_balance,
            "Payment applied"
        );

        Ok(PaymentOutcome { applied: true })
    }
}

/// Read path for organization balances
pub struct OrganizationRepository;

impl OrganizationRepository {
    /// Get organization by INN; reads committed state only
    pub async fn get_by_inn(
        pool: &PgPool,
        inn: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let org: Option<Organization> = sqlx::query_as(
            r#"SELECT id, inn, balance, created_at, updated_at
               FROM organizations WHERE inn = $1"#,
        )
        .bind(inn)
        .fetch_optional(pool)
        .await?;

        Ok(org)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn notification(amount: &str, inn: &str) -> PaymentNotification {
        PaymentNotification {
            operation_id: Uuid::new_v4(),
            amount: Decimal::from_str(amount).unwrap(),
            payer_inn: inn.to_string(),
            document_number: "PAY-001".to_string(),
            document_date: Utc::now(),
        }
    }

    #[test]
    fn test_validate_accepts_positive_amount() {
        let inn = notification("500.00", "1234567890").validate().unwrap();
        assert_eq!(inn.as_str(), "1234567890");
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let result = notification("-10.00", "1234567890").validate();
        assert!(matches!(result, Err(PaymentError::InvalidAmount)));
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let result = notification("0.00", "1234567890").validate();
        assert!(matches!(result, Err(PaymentError::InvalidAmount)));
    }

    #[test]
    fn test_validate_rejects_malformed_inn() {
        let result = notification("500.00", "not-an-inn").validate();
        assert!(matches!(result, Err(PaymentError::InvalidInn(_))));
    }
}
