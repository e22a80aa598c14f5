use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper bound of the amount filter; a range of `[0, MAX_AMOUNT]` means "no amount filter".
pub const MAX_AMOUNT: f64 = 10_000.0;

/// Order lifecycle status as reported by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses in display order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Cancelled,
        ]
    }

    /// Parse from a wire code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Amount string that does not parse as a decimal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid order amount {value:?}: {reason}")]
pub struct AmountParseError {
    pub value: String,
    pub reason: String,
}

/// One row of the orders list.
///
/// `status` stays the raw wire string so that values added on the server side
/// still reach the table; `amount` is a decimal string to keep currency exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItemDto {
    pub id: String,
    pub customer_name: String,
    pub status: String,
    pub amount: String,
    pub order_date: DateTime<Utc>,
}

impl OrderListItemDto {
    /// Known status, if the raw value is one
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(&self.status)
    }
}

/// Parse a decimal amount string such as `"1234.5"`. Malformed values are
/// reported, never coerced to zero.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountParseError> {
    Decimal::from_str(value).map_err(|e| AmountParseError {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
