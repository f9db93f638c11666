//! API boundary types
//!
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`error_codes`]: standard error code constants
//! - [`StrictDecimal`]: format-validated decimal at the Serde layer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_AMOUNT: i32 = 1002;
    pub const SAME_CUSTOMER: i32 = 1003;

    // Resource errors (4xxx)
    pub const CUSTOMER_NOT_FOUND: i32 = 4001;
    pub const DUPLICATE_NAME: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// StrictDecimal: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format Decimal - validates format during deserialization
///
/// Accepts both JSON strings and JSON numbers, rejecting sloppy string
/// forms (`.5`, `5.`, empty). Sign and range policy is the transfer
/// engine's job, not the codec's.
#[derive(Debug, Clone, Copy)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for StrictDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Support both JSON number and JSON string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        let value = DecimalOrString::deserialize(deserializer)?;

        match value {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                if s.starts_with('.') || s.starts_with("-.") {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if s.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }

                let d = Decimal::from_str(&s)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;
                Ok(StrictDecimal(d))
            }
            DecimalOrString::Number(d) => Ok(StrictDecimal(d)),
        }
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // StrictDecimal Tests
    // =========================================================================

    #[test]
    fn test_strict_decimal_valid_string() {
        let json = r#""1.5""#;
        let d: StrictDecimal = serde_json::from_str(json).unwrap();
        assert_eq!(*d, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_strict_decimal_valid_number() {
        let json = r#"1.5"#;
        let d: StrictDecimal = serde_json::from_str(json).unwrap();
        assert_eq!(*d, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_strict_decimal_accepts_negative() {
        // Sign policy belongs to the engine; the codec passes it through.
        let d: StrictDecimal = serde_json::from_str(r#""-1.5""#).unwrap();
        assert_eq!(*d, Decimal::from_str("-1.5").unwrap());
    }

    #[test]
    fn test_strict_decimal_rejects_dot_prefix() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#"".5""#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("use 0.5 not .5"));
    }

    #[test]
    fn test_strict_decimal_rejects_dot_suffix() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#""5.""#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("use 5.0 not 5."));
    }

    #[test]
    fn test_strict_decimal_rejects_empty() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_strict_decimal_rejects_garbage() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#""xyz""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_decimal_serializes_as_string() {
        let d = StrictDecimal::from_decimal(Decimal::from_str("50.05").unwrap());
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""50.05""#);
    }

    // =========================================================================
    // ApiResponse Tests
    // =========================================================================

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<()>::error(error_codes::DUPLICATE_NAME, "Customer already exists");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], error_codes::DUPLICATE_NAME);
        assert_eq!(json["msg"], "Customer already exists");
        assert!(json.get("data").is_none());
    }
}
