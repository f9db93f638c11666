//! Data models for customer accounts

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Fixed page size for all listing endpoints
pub const PAGE_SIZE: i64 = 20;

/// A customer account holding a decimal balance.
///
/// Balances are stored as NUMERIC(14, 2); they are mutated only as a side
/// effect of a committed transfer.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    /// Unique name, 1..=50 characters
    #[schema(example = "pizza-planet")]
    pub name: String,
    /// Current balance; may be negative (no overdraft protection)
    #[schema(value_type = String, example = "50.05")]
    pub balance: Decimal,
}

/// Listing filter. An exact `id` match takes precedence over the
/// name-substring match when both are supplied.
#[derive(Debug, Default, Clone)]
pub struct CustomerFilter {
    pub id: Option<i64>,
    pub name_contains: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn customer_serializes_balance_as_string() {
        let customer = Customer {
            id: 1,
            name: "pizza-planet".to_string(),
            balance: Decimal::from_str("-50.05").unwrap(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "pizza-planet");
        assert_eq!(json["balance"], "-50.05");
    }
}
