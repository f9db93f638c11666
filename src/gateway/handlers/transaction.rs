//! Transaction (transfer) handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::super::state::AppState;
use super::super::types::{ApiResponse, StrictDecimal, error_codes};
use crate::transfer::{
    TransactionFilter, TransactionRecord, TransferError, TransferRequest, TransferService,
};

/// Create transaction request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Customer paying the amount
    pub source_id: i64,
    /// Customer receiving the amount
    pub target_id: i64,
    /// Amount to move; must be positive
    #[schema(value_type = String, example = "50.00")]
    pub amount: StrictDecimal,
}

/// Transaction listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTransactionsQuery {
    /// 1-based page number (page size is fixed at 20)
    pub page: Option<u32>,
    /// Exact-day match, YYYY-MM-DD
    pub date: Option<NaiveDate>,
    /// Matches transactions where this customer is either side
    pub customer_id: Option<i64>,
}

/// Create a transaction: transfer an amount between two customers
///
/// POST /api/v1/transactions
///
/// The transaction record and both balance updates commit atomically; a
/// rejected transfer leaves every balance exactly as it was.
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transfer committed", body = ApiResponse<TransactionRecord>),
        (status = 400, description = "Invalid amount, identical customers, or customer(s) not found"),
        (status = 500, description = "Commit failed; no state was changed")
    ),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransactionRecord>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let transfer = TransferRequest {
        source_id: req.source_id,
        target_id: req.target_id,
        amount: req.amount.inner(),
    };

    match TransferService::execute(&state.db, transfer).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(ApiResponse::success(record)))),
        Err(e) => {
            let (status, code) = match &e {
                TransferError::InvalidAmount => {
                    (StatusCode::BAD_REQUEST, error_codes::INVALID_AMOUNT)
                }
                TransferError::SameAccount => (StatusCode::BAD_REQUEST, error_codes::SAME_CUSTOMER),
                TransferError::AccountNotFound => {
                    (StatusCode::BAD_REQUEST, error_codes::CUSTOMER_NOT_FOUND)
                }
                TransferError::Persistence(db_err) => {
                    tracing::error!("Transfer commit failed: {}", db_err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        error_codes::INTERNAL_ERROR,
                    )
                }
            };
            Err((status, Json(ApiResponse::<()>::error(code, e.to_string()))))
        }
    }
}

/// List transaction records
///
/// GET /api/v1/transactions?page=1&date=2026-04-20&customer_id=7
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    params(ListTransactionsQuery),
    responses(
        (status = 200, description = "Page of transactions", body = ApiResponse<Vec<TransactionRecord>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<ApiResponse<Vec<TransactionRecord>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = TransactionFilter {
        day: query.date,
        customer_id: query.customer_id,
    };

    match TransferService::list(state.db.pool(), &filter, query.page.unwrap_or(1)).await {
        Ok(records) => Ok(Json(ApiResponse::success(records))),
        Err(e) => {
            tracing::error!("Transaction listing failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "Transaction listing failed",
                )),
            ))
        }
    }
}
