//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use super::types::{BankWebhookRequest, ErrorDetail, HealthResponse, OrganizationBalanceResponse};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Ledger API",
        version = "1.0.0",
        description = "Bank payment webhook ledger: idempotent ingestion with an audited per-organization balance.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::bank_webhook,
        crate::gateway::handlers::organization_balance,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            BankWebhookRequest,
            OrganizationBalanceResponse,
            ErrorDetail,
            HealthResponse,
        )
    ),
    tags(
        (name = "Webhook", description = "Bank payment notification ingestion"),
        (name = "Organizations", description = "Balance queries"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Payment Ledger API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/webhook/bank"));
        assert!(paths.paths.contains_key("/api/organizations/{inn}/balance"));
        assert!(paths.paths.contains_key("/api/v1/health"));
    }
}
