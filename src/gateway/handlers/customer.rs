//! Customer account handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiResponse, StrictDecimal, error_codes};
use crate::customer::{Customer, CustomerError, CustomerFilter, CustomerRepository};

/// Create customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    /// Unique account name
    #[validate(length(min = 1, max = 50, message = "Length must be between 1 and 50"))]
    #[schema(example = "pizza-planet")]
    pub name: String,
    /// Opening balance; defaults to 0
    #[schema(value_type = Option<String>, example = "0.00")]
    pub balance: Option<StrictDecimal>,
}

/// Customer listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCustomersQuery {
    /// 1-based page number (page size is fixed at 20)
    pub page: Option<u32>,
    /// Exact id match; takes precedence over `name`
    pub id: Option<i64>,
    /// Name substring match
    pub name: Option<String>,
}

/// Create a customer account
///
/// POST /api/v1/customers
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<Customer>),
        (status = 400, description = "Invalid name or balance"),
        (status = 409, description = "Customer name already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), (StatusCode, Json<ApiResponse<()>>)> {
    if let Err(e) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                e.to_string(),
            )),
        ));
    }

    let initial_balance = req.balance.map(StrictDecimal::inner).unwrap_or(Decimal::ZERO);

    match CustomerRepository::create(state.db.pool(), &req.name, initial_balance).await {
        Ok(customer) => Ok((StatusCode::CREATED, Json(ApiResponse::success(customer)))),
        Err(CustomerError::DuplicateName) => Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                error_codes::DUPLICATE_NAME,
                "Customer already exists",
            )),
        )),
        Err(e) => {
            tracing::error!("Customer creation failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "Customer creation failed",
                )),
            ))
        }
    }
}

/// List customer accounts
///
/// GET /api/v1/customers?page=1&id=2&name=planet
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    params(ListCustomersQuery),
    responses(
        (status = 200, description = "Page of customers", body = ApiResponse<Vec<Customer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = CustomerFilter {
        id: query.id,
        name_contains: query.name,
    };

    match CustomerRepository::list(state.db.pool(), &filter, query.page.unwrap_or(1)).await {
        Ok(customers) => Ok(Json(ApiResponse::success(customers))),
        Err(e) => {
            tracing::error!("Customer listing failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "Customer listing failed",
                )),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_number_balance() {
        let json = r#"{"name": "pizza-planet", "balance": 50.0505560}"#;
        let req: CreateCustomerRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.balance.unwrap().inner().to_string(), "50.0505560");
    }

    #[test]
    fn test_create_request_balance_defaults_to_none() {
        let req: CreateCustomerRequest = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(req.balance.is_none());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let req: CreateCustomerRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_long_name_fails_validation() {
        let json = format!(r#"{{"name": "{}"}}"#, "pizza".repeat(11));
        let req: CreateCustomerRequest = serde_json::from_str(&json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_fifty_char_name_passes_validation() {
        let json = format!(r#"{{"name": "{}"}}"#, "a".repeat(50));
        let req: CreateCustomerRequest = serde_json::from_str(&json).unwrap();
        assert!(req.validate().is_ok());
    }
}
