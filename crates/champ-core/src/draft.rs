//! # Sale Draft
//!
//! The in-progress, unsaved sale being composed on the sale screen.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Draft State Operations                         │
//! │                                                                     │
//! │  UI Action                 Draft Operation        State Change      │
//! │  ─────────                 ───────────────        ────────────      │
//! │                                                                     │
//! │  Click "Add Item" ───────► add_line() ──────────► items.push(empty) │
//! │                                                                     │
//! │  Edit qty/price/disc ────► set_quantity() etc. ─► items[i].field    │
//! │                                                                     │
//! │  Pick suggestion ────────► apply_product() ─────► overwrite ref,    │
//! │                                                    name, unit price │
//! │                                                                     │
//! │  Click trash icon ───────► remove_line(i) ──────► items.remove(i)   │
//! │                                                                     │
//! │  Render summary ─────────► totals() ────────────► (read only)       │
//! │                                                                     │
//! │  NOTE: Out-of-range indices are silent no-ops across the board.     │
//! │        Totals are derived on every read, never stored.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Created when the sale screen mounts, mutated only through the
//! operations below, discarded on navigation away or on a successful
//! submit. Never persisted client-side.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PaymentMethod, Product};

// =============================================================================
// Line Item
// =============================================================================

/// One product entry within the sale draft.
///
/// ## Design Notes
/// - `product`: catalog reference, `None` until a suggestion is picked
/// - `display_name`: doubles as the free-text search field; typing in it
///   does NOT clear the selected product
/// - amounts are integer cents, quantity is a whole count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Selected product id, if any.
    pub product: Option<String>,

    /// Product name shown in the row / search text typed by the cashier.
    pub display_name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price in cents.
    pub unit_price_cents: i64,

    /// Flat discount in cents applied to this line.
    pub discount_cents: i64,
}

impl LineItem {
    /// A blank row as appended by "Add Item": quantity 1, everything else zero.
    pub fn empty() -> Self {
        LineItem {
            product: None,
            display_name: String::new(),
            quantity: 1,
            unit_price_cents: 0,
            discount_cents: 0,
        }
    }

    /// Line total in cents: `max(0, quantity × unit_price − discount)`.
    ///
    /// A discount larger than the line's worth floors the total at zero;
    /// it never goes negative and never bleeds into other lines.
    pub fn line_total_cents(&self) -> i64 {
        (self.quantity * self.unit_price_cents - self.discount_cents).max(0)
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Overwrites the catalog-sourced fields from a resolved product.
    ///
    /// ## Price Freezing
    /// The unit price is captured at this moment. If the catalog price
    /// changes later, this line retains the price the cashier saw.
    pub fn apply_product(&mut self, product: &Product) {
        self.product = Some(product.id.clone());
        self.display_name = product.name.clone();
        self.unit_price_cents = product.price_cents;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::empty()
    }
}

// =============================================================================
// Draft Totals
// =============================================================================

/// Derived monetary summary of a draft. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftTotals {
    /// Sum of all line totals, in cents.
    pub subtotal_cents: i64,
    /// Subtotal plus flat tax, in cents.
    pub total_cents: i64,
}

impl DraftTotals {
    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The sale being composed.
///
/// ## Invariants
/// - `items` order is display/entry order and is significant for the receipt
/// - `subtotal`/`total` are never stored; [`SaleDraft::totals`] derives them
///   from the current items and tax on every call
/// - `tax_cents` and `cash_received_cents` are clamped non-negative by their
///   setters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleDraft {
    /// Line items in entry order.
    pub items: Vec<LineItem>,

    /// How the customer pays.
    pub payment_method: PaymentMethod,

    /// Flat tax amount in cents (not a rate).
    pub tax_cents: i64,

    /// Cash tendered by the customer, in cents.
    pub cash_received_cents: i64,
}

impl SaleDraft {
    /// Creates a fresh draft with a single blank line, the state the sale
    /// form mounts with.
    pub fn new() -> Self {
        SaleDraft {
            items: vec![LineItem::empty()],
            payment_method: PaymentMethod::default(),
            tax_cents: 0,
            cash_received_cents: 0,
        }
    }

    /// Appends a blank line item.
    pub fn add_line(&mut self) {
        self.items.push(LineItem::empty());
    }

    /// Removes the line at `index`. Out of range is a silent no-op.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Sets a line's quantity. Out of range is a silent no-op.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }

    /// Sets a line's unit price in cents. Out of range is a silent no-op.
    pub fn set_unit_price(&mut self, index: usize, cents: i64) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price_cents = cents;
        }
    }

    /// Sets a line's discount in cents. Out of range is a silent no-op.
    pub fn set_discount(&mut self, index: usize, cents: i64) {
        if let Some(item) = self.items.get_mut(index) {
            item.discount_cents = cents;
        }
    }

    /// Sets a line's free-text search/display field. Out of range is a
    /// silent no-op. Does not touch the selected product.
    pub fn set_display_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.display_name = name.into();
        }
    }

    /// Overwrites a line's catalog fields from a resolved product.
    /// Out of range is a silent no-op.
    pub fn apply_product(&mut self, index: usize, product: &Product) {
        if let Some(item) = self.items.get_mut(index) {
            item.apply_product(product);
        }
    }

    /// Sets the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Sets the flat tax amount, clamped at zero.
    pub fn set_tax(&mut self, cents: i64) {
        self.tax_cents = cents.max(0);
    }

    /// Sets the cash tendered, clamped at zero.
    pub fn set_cash_received(&mut self, cents: i64) {
        self.cash_received_cents = cents.max(0);
    }

    /// Cash tendered as Money.
    #[inline]
    pub fn cash_received(&self) -> Money {
        Money::from_cents(self.cash_received_cents)
    }

    /// Derives the subtotal and grand total from the current items and tax.
    ///
    /// Pure and recomputed on every call; there is no cached copy to go
    /// stale when items or tax change.
    pub fn totals(&self) -> DraftTotals {
        let subtotal_cents: i64 = self.items.iter().map(|i| i.line_total_cents()).sum();
        DraftTotals {
            subtotal_cents,
            total_cents: subtotal_cents + self.tax_cents,
        }
    }

    /// Checks if the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of line items (including blank ones).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for SaleDraft {
    fn default() -> Self {
        SaleDraft::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            price_cents,
            image: None,
        }
    }

    #[test]
    fn test_new_draft_has_one_blank_line() {
        let draft = SaleDraft::new();
        assert_eq!(draft.line_count(), 1);
        assert_eq!(draft.items[0], LineItem::empty());
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn test_line_total_floors_at_zero() {
        let mut line = LineItem::empty();
        line.quantity = 2;
        line.unit_price_cents = 1000;
        line.discount_cents = 5000; // discount exceeds the line's worth
        assert_eq!(line.line_total_cents(), 0);

        line.discount_cents = 300;
        assert_eq!(line.line_total_cents(), 1700);
    }

    #[test]
    fn test_totals_example() {
        // items = [{qty 2, price 10.00}, {qty 1, price 5.00, discount 1.00}],
        // tax 2.00 => subtotal 24.00, total 26.00
        let mut draft = SaleDraft::new();
        draft.set_quantity(0, 2);
        draft.set_unit_price(0, 1000);
        draft.add_line();
        draft.set_quantity(1, 1);
        draft.set_unit_price(1, 500);
        draft.set_discount(1, 100);
        draft.set_tax(200);

        let totals = draft.totals();
        assert_eq!(totals.subtotal_cents, 2400);
        assert_eq!(totals.total_cents, 2600);
    }

    #[test]
    fn test_totals_recomputed_on_every_read() {
        let mut draft = SaleDraft::new();
        draft.set_quantity(0, 1);
        draft.set_unit_price(0, 1000);
        assert_eq!(draft.totals().total_cents, 1000);

        draft.set_tax(250);
        assert_eq!(draft.totals().total_cents, 1250);

        draft.set_quantity(0, 3);
        assert_eq!(draft.totals().subtotal_cents, 3000);
        assert_eq!(draft.totals().total_cents, 3250);
    }

    #[test]
    fn test_remove_line_out_of_range_is_noop() {
        let mut draft = SaleDraft::new();
        draft.remove_line(5);
        assert_eq!(draft.line_count(), 1);

        draft.remove_line(0);
        assert!(draft.is_empty());
        draft.remove_line(0); // still a no-op, no panic
        assert!(draft.is_empty());
    }

    #[test]
    fn test_setters_out_of_range_are_noops() {
        let mut draft = SaleDraft::new();
        draft.set_quantity(9, 4);
        draft.set_unit_price(9, 100);
        draft.set_discount(9, 100);
        draft.set_display_name(9, "ghost");
        assert_eq!(draft.items[0], LineItem::empty());
    }

    #[test]
    fn test_apply_product_overwrites_catalog_fields() {
        let mut draft = SaleDraft::new();
        draft.set_display_name(0, "cok");
        draft.set_discount(0, 50);

        let coke = product("p1", "Coca-Cola 330ml", 500);
        draft.apply_product(0, &coke);

        let line = &draft.items[0];
        assert_eq!(line.product.as_deref(), Some("p1"));
        assert_eq!(line.display_name, "Coca-Cola 330ml");
        assert_eq!(line.unit_price_cents, 500);
        // Untouched fields survive the selection
        assert_eq!(line.discount_cents, 50);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_tax_and_cash_clamped_non_negative() {
        let mut draft = SaleDraft::new();
        draft.set_tax(-100);
        draft.set_cash_received(-500);
        assert_eq!(draft.tax_cents, 0);
        assert_eq!(draft.cash_received_cents, 0);
    }
}
