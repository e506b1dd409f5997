//! # Sale Composer
//!
//! The sale screen's editing facade: one [`SaleDraft`] plus the catalog
//! cache it resolves products from.
//!
//! ## Screen Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  New Sale screen                                                    │
//! │                                                                     │
//! │  [search field] ──► suggestions(i)  ──► catalog.search(text)        │
//! │  [pick result ] ──► select_product(i, id) ──► draft.apply_product   │
//! │  [qty/price/..] ──► set_* passthroughs                              │
//! │  [summary panel]──► totals() / change_due()   (derived every read)  │
//! │  [Complete Sale]──► validate() then hand draft to SaleSubmitter     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use champ_core::draft::{DraftTotals, SaleDraft};
use champ_core::error::DraftError;
use champ_core::money::Money;
use champ_core::settlement;
use champ_core::types::{PaymentMethod, Product};
use champ_core::validation;

use crate::catalog::ProductCatalogCache;

/// Draft editing state for one sale screen session.
#[derive(Debug, Clone)]
pub struct SaleComposer {
    draft: SaleDraft,
    catalog: ProductCatalogCache,
}

impl SaleComposer {
    /// Fresh composer over a loaded catalog; the draft starts with one
    /// blank line, matching the mounted form.
    pub fn new(catalog: ProductCatalogCache) -> Self {
        SaleComposer {
            draft: SaleDraft::new(),
            catalog,
        }
    }

    /// The draft being composed.
    pub fn draft(&self) -> &SaleDraft {
        &self.draft
    }

    // =========================================================================
    // Line Editing
    // =========================================================================

    /// Appends a blank line.
    pub fn add_line(&mut self) {
        self.draft.add_line();
    }

    /// Removes a line. Out of range is a silent no-op.
    pub fn remove_line(&mut self, index: usize) {
        self.draft.remove_line(index);
    }

    pub fn set_quantity(&mut self, index: usize, quantity: i64) {
        self.draft.set_quantity(index, quantity);
    }

    pub fn set_unit_price(&mut self, index: usize, cents: i64) {
        self.draft.set_unit_price(index, cents);
    }

    pub fn set_discount(&mut self, index: usize, cents: i64) {
        self.draft.set_discount(index, cents);
    }

    /// Updates a line's search text without touching its selected product.
    pub fn set_search_text(&mut self, index: usize, text: impl Into<String>) {
        self.draft.set_display_name(index, text);
    }

    /// Catalog suggestions for a line's current search text.
    pub fn suggestions(&self, index: usize) -> Vec<&Product> {
        match self.draft.items.get(index) {
            Some(line) => self.catalog.search(&line.display_name),
            None => Vec::new(),
        }
    }

    /// Applies a picked suggestion to a line. Unknown product ids and
    /// out-of-range lines are silent no-ops, mirroring the other line
    /// operations.
    pub fn select_product(&mut self, index: usize, product_id: &str) {
        if let Some(product) = self.catalog.resolve(product_id) {
            self.draft.apply_product(index, &product.clone());
        }
    }

    // =========================================================================
    // Payment Editing
    // =========================================================================

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.draft.set_payment_method(method);
    }

    pub fn set_tax(&mut self, cents: i64) {
        self.draft.set_tax(cents);
    }

    pub fn set_cash_received(&mut self, cents: i64) {
        self.draft.set_cash_received(cents);
    }

    // =========================================================================
    // Derived Reads
    // =========================================================================

    /// Subtotal and grand total, derived from the current draft.
    pub fn totals(&self) -> DraftTotals {
        self.draft.totals()
    }

    /// Change owed for the cash tendered so far.
    pub fn change_due(&self) -> Money {
        settlement::change_due(&self.draft)
    }

    /// Runs full draft validation, as the submit button does.
    pub fn validate(&self) -> Result<(), DraftError> {
        validation::validate_draft(&self.draft)
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
            sku: format!("SKU-{id}"),
            price_cents,
            image: None,
        }
    }

    fn composer() -> SaleComposer {
        SaleComposer::new(ProductCatalogCache::from_products(vec![
            product("p1", "Coca-Cola 330ml", 500),
            product("p2", "Bread", 250),
        ]))
    }

    #[test]
    fn test_suggestion_then_selection_flow() {
        let mut composer = composer();
        composer.set_search_text(0, "cola");

        let ids: Vec<&str> = composer.suggestions(0).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1"]);

        composer.select_product(0, "p1");
        let line = &composer.draft().items[0];
        assert_eq!(line.product.as_deref(), Some("p1"));
        assert_eq!(line.display_name, "Coca-Cola 330ml");
        assert_eq!(line.unit_price_cents, 500);
    }

    #[test]
    fn test_select_unknown_product_is_noop() {
        let mut composer = composer();
        composer.select_product(0, "ghost");
        assert!(composer.draft().items[0].product.is_none());
    }

    #[test]
    fn test_suggestions_out_of_range_line() {
        let composer = composer();
        assert!(composer.suggestions(7).is_empty());
    }

    #[test]
    fn test_totals_and_change_follow_edits() {
        let mut composer = composer();
        composer.select_product(0, "p1");
        composer.set_quantity(0, 4); // 20.00
        composer.set_tax(100); // total 21.00
        composer.set_cash_received(2500);

        assert_eq!(composer.totals().total_cents, 2100);
        assert_eq!(composer.change_due().cents(), 400);
    }

    #[test]
    fn test_validate_reports_unselected_line() {
        let mut composer = composer();
        composer.set_search_text(0, "cola"); // typed but never picked
        assert!(composer.validate().is_err());

        composer.select_product(0, "p1");
        assert!(composer.validate().is_ok());
    }
}
