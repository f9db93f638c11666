//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::customer::Customer;
use crate::gateway::handlers::{CreateCustomerRequest, CreateTransactionRequest, HealthResponse};
use crate::transfer::TransactionRecord;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "payflow API",
        description = "A minimal financial record-keeping API: create customers and transfer funds between them, with running balances.",
        license(name = "MIT")
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_customer,
        crate::gateway::handlers::list_customers,
        crate::gateway::handlers::create_transaction,
        crate::gateway::handlers::list_transactions,
    ),
    components(schemas(
        HealthResponse,
        Customer,
        TransactionRecord,
        CreateCustomerRequest,
        CreateTransactionRequest,
    )),
    tags(
        (name = "Customers", description = "Customer accounts holding a balance"),
        (name = "Transactions", description = "Atomic transfers between customers"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "payflow API");
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("payflow API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/customers"));
        assert!(paths.paths.contains_key("/api/v1/transactions"));
    }
}
