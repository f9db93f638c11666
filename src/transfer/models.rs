//! Transfer request and transaction record types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A typed transfer request: move `amount` from `source_id` to `target_id`.
///
/// Produced by the gateway's request parsing; the engine's validation gate
/// runs on this struct before any store access.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest {
    pub source_id: i64,
    pub target_id: i64,
    pub amount: Decimal,
}

/// Immutable record of a committed transfer.
///
/// `source_balance` and `target_balance` are the post-transfer balances
/// captured at commit time, never recomputed later.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TransactionRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub source_id: i64,
    pub target_id: i64,
    #[schema(value_type = String, example = "50.00")]
    pub amount: Decimal,
    /// Source balance immediately after the commit
    #[schema(value_type = String, example = "-50.00")]
    pub source_balance: Decimal,
    /// Target balance immediately after the commit
    #[schema(value_type = String, example = "50.00")]
    pub target_balance: Decimal,
}

/// Listing filter for transaction records.
#[derive(Debug, Default, Clone)]
pub struct TransactionFilter {
    /// Exact-day match on the creation timestamp
    pub day: Option<NaiveDate>,
    /// Matches transactions where the customer is either side
    pub customer_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn record_serializes_decimal_fields_as_strings() {
        let record = TransactionRecord {
            id: 7,
            created_at: Utc::now(),
            source_id: 1,
            target_id: 2,
            amount: Decimal::from_str("50.00").unwrap(),
            source_balance: Decimal::from_str("-50.00").unwrap(),
            target_balance: Decimal::from_str("50.00").unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["amount"], "50.00");
        assert_eq!(json["source_balance"], "-50.00");
        assert_eq!(json["target_balance"], "50.00");
    }
}
