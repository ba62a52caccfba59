use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// A single line item on a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description as printed on the receipt.
    pub short_description: String,
    /// Decimal price string, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted purchase receipt.
///
/// Prices and the total stay decimal strings here; rule evaluation parses
/// them into [`crate::Money`]. Receipts are immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Line items, at least one.
    pub items: Vec<Item>,
    /// Decimal total string, e.g. `"35.35"`.
    pub total: String,
}

/// Identifier assigned to a stored receipt: a random version-4 UUID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id, accepting only syntactically valid **v4** UUIDs.
    ///
    /// A well-formed UUID of another version is rejected the same way as
    /// garbage: callers treat both as invalid-identifier-syntax.
    pub fn parse_v4(s: &str) -> Result<Self, TypeError> {
        let uuid = Uuid::parse_str(s).map_err(|_| TypeError::InvalidReceiptId(s.to_string()))?;
        if uuid.get_version_num() != 4 {
            return Err(TypeError::InvalidReceiptId(s.to_string()));
        }
        Ok(Self(uuid))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ReceiptId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_v4(s)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_v4_and_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn parse_roundtrip() {
        let id = ReceiptId::generate();
        let parsed = ReceiptId::parse_v4(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_non_uuid_strings() {
        for bad in ["", "not-a-uuid", "1234", "adb6b560-0eef-42bc-9d16"] {
            assert!(ReceiptId::parse_v4(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_non_v4_uuids() {
        // Valid UUID syntax, but version 1.
        let v1 = "c232ab00-9414-11ec-b3c8-9f6bdeced846";
        assert!(ReceiptId::parse_v4(v1).is_err());
    }

    #[test]
    fn receipt_wire_format_is_camel_case() {
        let receipt = Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".into(),
            purchase_time: "13:01".into(),
            items: vec![Item::new("Mountain Dew 12PK", "6.49")],
            total: "6.49".into(),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"purchaseDate\""));
        assert!(json.contains("\"purchaseTime\""));
        assert!(json.contains("\"shortDescription\""));

        let parsed: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt);
    }

    #[test]
    fn receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
