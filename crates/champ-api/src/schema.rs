//! # Wire Schemas
//!
//! Explicit request/response shapes for the backend REST API, validated
//! exactly once at this boundary.
//!
//! ## Two Worlds, One Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   Wire (JSON)                          champ-core                   │
//! │   ───────────                          ──────────                   │
//! │   decimal amounts (10.5)     ⇄         integer cents (1050)         │
//! │   camelCase keys             ⇄         snake_case fields            │
//! │   Mongo `_id`                ⇄         `id`                         │
//! │                                                                     │
//! │   Conversions happen HERE and nowhere else. Core code never sees    │
//! │   a floating-point amount.                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use champ_core::draft::SaleDraft;
use champ_core::settlement;
use champ_core::types::{
    PaymentDetails, PaymentMethod, Product, ProductSnapshot, SaleStatus, SubmittedItem,
    SubmittedSale,
};

// =============================================================================
// Amount Conversion
// =============================================================================

/// Decimal wire amount → integer cents, rounding half away from zero.
pub(crate) fn cents_from_decimal(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Integer cents → decimal wire amount.
pub(crate) fn decimal_from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// =============================================================================
// Catalog Feed (GET /products)
// =============================================================================

/// Response envelope of `GET /products?limit=N`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductWire>,
}

/// One catalog product on the wire.
#[derive(Debug, Deserialize)]
pub struct ProductWire {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<ProductWire> for Product {
    fn from(wire: ProductWire) -> Self {
        Product {
            id: wire.id,
            name: wire.name,
            sku: wire.sku,
            price_cents: cents_from_decimal(wire.price),
            image: wire.image,
        }
    }
}

// =============================================================================
// Sale Creation (POST /sales)
// =============================================================================

/// Request body of `POST /sales`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub items: Vec<SaleItemRequest>,
    pub payment_method: PaymentMethod,
    pub tax: f64,
    /// Present iff the payment method involves physical cash; omitted
    /// entirely (not null) for card/mobile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetailsRequest>,
}

/// One outgoing sale line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
    /// Catalog product id.
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
}

/// Cash settlement fields of the outgoing payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsRequest {
    pub cash_received: f64,
    pub change: f64,
}

impl CreateSaleRequest {
    /// Builds the outgoing payload from a validated draft.
    ///
    /// Callers run draft validation first; a line without a product ref
    /// would have been rejected there, so the fallback here is never hit
    /// in practice.
    pub fn from_draft(draft: &SaleDraft) -> Self {
        let items = draft
            .items
            .iter()
            .map(|line| SaleItemRequest {
                product: line.product.clone().unwrap_or_default(),
                quantity: line.quantity,
                unit_price: decimal_from_cents(line.unit_price_cents),
                discount: decimal_from_cents(line.discount_cents),
            })
            .collect();

        let payment_details =
            settlement::cash_fields(draft).map(|(received, change)| PaymentDetailsRequest {
                cash_received: decimal_from_cents(received.cents()),
                change: decimal_from_cents(change.cents()),
            });

        CreateSaleRequest {
            items,
            payment_method: draft.payment_method,
            tax: decimal_from_cents(draft.tax_cents),
            payment_details,
        }
    }
}

// =============================================================================
// Sale Documents (POST /sales response, GET /sales/:id)
// =============================================================================

/// Response envelope carrying a sale document.
#[derive(Debug, Deserialize)]
pub struct SaleResponse {
    pub sale: SaleWire,
}

/// A sale document on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleWire {
    #[serde(rename = "_id")]
    pub id: String,
    pub sale_number: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<SaleItemWire>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_details: Option<PaymentDetailsWire>,
    #[serde(default)]
    pub status: SaleStatus,
}

/// One confirmed sale line on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemWire {
    /// Populated product reference (the backend resolves it for receipts).
    #[serde(default)]
    pub product: ProductSnapshotWire,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Frozen product reference on a sale line.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSnapshotWire {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Cash settlement fields echoed back by the backend.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsWire {
    #[serde(default)]
    pub cash_received: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
}

impl From<SaleWire> for SubmittedSale {
    fn from(wire: SaleWire) -> Self {
        let payment_details = wire
            .payment_details
            .map(|pd| PaymentDetails {
                cash_received_cents: pd.cash_received.map(cents_from_decimal),
                change_cents: pd.change.map(cents_from_decimal),
            })
            .unwrap_or_default();

        SubmittedSale {
            id: wire.id,
            sale_number: wire.sale_number,
            created_at: wire.created_at,
            items: wire
                .items
                .into_iter()
                .map(|item| SubmittedItem {
                    product: ProductSnapshot {
                        id: item.product.id,
                        name: item.product.name,
                    },
                    quantity: item.quantity,
                    unit_price_cents: cents_from_decimal(item.unit_price),
                    total_price_cents: cents_from_decimal(item.total_price),
                })
                .collect(),
            subtotal_cents: cents_from_decimal(wire.subtotal),
            tax_cents: cents_from_decimal(wire.tax),
            total_cents: cents_from_decimal(wire.total),
            payment_method: wire.payment_method,
            payment_details,
            status: wire.status,
        }
    }
}

// =============================================================================
// Failure Bodies
// =============================================================================

/// The backend's failure shape: `{ message, errors? }`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

// =============================================================================
// Unit Tests
// =============================================================================
