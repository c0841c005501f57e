use std::sync::Arc;

use crate::ledger::{Database, PaymentService};

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL ledger store
    pub db: Arc<Database>,
    /// Payment processor, shared across request handlers
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        let payments = Arc::new(PaymentService::new(db.clone()));
        Self { db, payments }
    }
}
