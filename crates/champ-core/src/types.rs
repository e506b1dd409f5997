//! # Domain Types
//!
//! Core domain types used throughout the Champ POS client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────┐  │
//! │  │    Product     │   │ PaymentMethod  │   │   SubmittedSale    │  │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────────  │  │
//! │  │  id (server)   │   │  Cash          │   │  id, sale_number   │  │
//! │  │  name / sku    │   │  Card          │   │  items (snapshots) │  │
//! │  │  price_cents   │   │  Mobile        │   │  totals, status    │  │
//! │  │  image         │   │  Mixed         │   │  payment_details   │  │
//! │  └────────────────┘   └────────────────┘   └────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rule
//! Everything here that carries an `id` was assigned by the backend. The
//! client never generates identifiers; it holds immutable copies. The
//! mutable client-side state lives in [`crate::draft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A sellable product, as projected into the catalog cache.
///
/// This is the read-only snapshot the sale screen works from. Staleness
/// relative to the backend is accepted: a stale price only affects the
/// current draft, never historical sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Stock Keeping Unit - business identifier, searchable.
    pub sku: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional image path/URL (list display only).
    pub image: Option<String>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-insensitive substring match against name OR sku.
    ///
    /// Drives the suggestion dropdown on the sale form. The caller is
    /// responsible for rejecting empty queries before matching.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.sku.to_lowercase().contains(needle_lower)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer settles the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Mobile money payment.
    Mobile,
    /// Split tender (part cash, part other).
    Mixed,
}

impl PaymentMethod {
    /// Whether cash handling applies to this method.
    ///
    /// Cash-received and change are only meaningful (and only sent to the
    /// backend) for methods where physical cash crosses the counter.
    #[inline]
    pub const fn uses_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash | PaymentMethod::Mixed)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The backend's status of a submitted sale.
///
/// The client only reads this; unknown future statuses must not break
/// parsing at the boundary, hence the catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Sale has been paid and recorded.
    Completed,
    /// Sale recorded but awaiting settlement.
    Pending,
    /// Sale was cancelled/refunded server-side.
    Cancelled,
    /// Any status this client version does not know about.
    #[serde(other)]
    Unknown,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Completed
    }
}

// =============================================================================
// Submitted Sale
// =============================================================================

/// Frozen product data carried on each submitted sale item.
///
/// The backend populates the product reference so receipts can print the
/// name without another lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSnapshot {
    /// Product id at time of sale (may be absent on legacy documents).
    #[serde(default)]
    pub id: String,

    /// Product name at time of sale.
    #[serde(default)]
    pub name: String,
}

/// A line of a submitted sale, as confirmed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedItem {
    /// Frozen product reference.
    pub product: ProductSnapshot,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price in cents at time of sale.
    pub unit_price_cents: i64,

    /// Server-confirmed line total in cents. Receipts print THIS value,
    /// never a client recomputation.
    pub total_price_cents: i64,
}

impl SubmittedItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the server-confirmed line total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// Cash-settlement details echoed back by the backend.
///
/// Both fields are absent for card/mobile sales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentDetails {
    pub cash_received_cents: Option<i64>,
    pub change_cents: Option<i64>,
}

/// A sale as recorded by the backend.
///
/// Server-assigned and read-only to the client: the sale screen hands this
/// to the receipt renderer and navigates away. It is never mutated or
/// persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedSale {
    pub id: String,
    pub sale_number: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub items: Vec<SubmittedItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_details: PaymentDetails,
    pub status: SaleStatus,
}

impl SubmittedSale {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_uses_cash() {
        assert!(PaymentMethod::Cash.uses_cash());
        assert!(PaymentMethod::Mixed.uses_cash());
        assert!(!PaymentMethod::Card.uses_cash());
        assert!(!PaymentMethod::Mobile.uses_cash());
    }

    #[test]
    fn test_payment_method_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mobile).unwrap(),
            "\"mobile\""
        );
        let parsed: PaymentMethod = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Mixed);
    }

    #[test]
    fn test_sale_status_unknown_catch_all() {
        let parsed: SaleStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, SaleStatus::Unknown);
    }

    #[test]
    fn test_product_matches_name_and_sku() {
        let product = Product {
            id: "p1".into(),
            name: "Coca-Cola 330ml".into(),
            sku: "BEV-001".into(),
            price_cents: 500,
            image: None,
        };
        assert!(product.matches("coca"));
        assert!(product.matches("bev-0"));
        assert!(!product.matches("fanta"));
    }
}
