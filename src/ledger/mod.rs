//! Ledger core: data model, Postgres store, and the payment processor

pub mod error;
pub mod models;
pub mod processor;
pub mod store;
pub mod validation;

pub use error::PaymentError;
pub use models::{BalanceLog, Organization, Payment};
pub use processor::{OrganizationRepository, PaymentNotification, PaymentOutcome, PaymentService};
pub use store::{Database, init_schema};
pub use validation::{Inn, ValidationError};
