use thiserror::Error;

use super::validation::ValidationError;

/// Errors surfaced by the payment processor.
///
/// A duplicate delivery is deliberately NOT an error: the processor reports
/// it as a successful no-op so the transport acknowledges it like a first
/// delivery.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid amount: must be positive")]
    InvalidAmount,

    #[error(transparent)]
    InvalidInn(#[from] ValidationError),
}
