//! payment-ledger - Bank Payment Webhook Ledger
//!
//! Records incoming bank payment notifications and maintains a running
//! balance per payer organization, with an audit trail of every balance
//! change. Each payment operation is applied exactly once, atomically,
//! even under concurrent or duplicate webhook delivery.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`ledger`] - data model, Postgres store, and the payment processor
//! - [`gateway`] - axum HTTP surface (webhook, balance query, health, docs)

pub mod config;
pub mod gateway;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use ledger::{
    BalanceLog, Database, Inn, Organization, OrganizationRepository, Payment, PaymentError,
    PaymentNotification, PaymentOutcome, PaymentService,
};
