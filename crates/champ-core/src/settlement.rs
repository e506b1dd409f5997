//! # Payment Settlement
//!
//! Derives the payment-side fields of a draft: cash change due, and which
//! cash fields are meaningful for the chosen payment method.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Sale total: CFA 26.00                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Cashier enters cash received: CFA 30.00                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  change_due() ← max(0, received − total) = CFA 4.00                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  cash_fields() gates what goes on the wire:                         │
//! │    cash / mixed  → paymentDetails { cashReceived, change }          │
//! │    card / mobile → paymentDetails omitted entirely                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Underpayment (`received < total`) floors change at zero and does NOT
//! block submission. Whether it should is an open product question; the
//! recorded behavior is kept as-is.

use crate::draft::SaleDraft;
use crate::money::Money;

/// Change owed to the customer: `max(0, cash_received − total)`.
///
/// Defined for every payment method (the summary panel always shows it),
/// but only *sent to the backend* for cash-bearing methods, see
/// [`cash_fields`].
pub fn change_due(draft: &SaleDraft) -> Money {
    (draft.cash_received() - draft.totals().total()).max(Money::zero())
}

/// The `(cash_received, change)` pair for the outgoing payload.
///
/// Returns `Some` iff the draft's payment method involves physical cash
/// (cash or mixed tender); `None` means the payload carries no
/// `paymentDetails` at all.
pub fn cash_fields(draft: &SaleDraft) -> Option<(Money, Money)> {
    if draft.payment_method.uses_cash() {
        Some((draft.cash_received(), change_due(draft)))
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;

    /// subtotal 24.00 + tax 2.00 = total 26.00
    fn draft_totaling_2600() -> SaleDraft {
        let mut draft = SaleDraft::new();
        draft.set_quantity(0, 2);
        draft.set_unit_price(0, 1000);
        draft.add_line();
        draft.set_quantity(1, 1);
        draft.set_unit_price(1, 500);
        draft.set_discount(1, 100);
        draft.set_tax(200);
        draft
    }

    #[test]
    fn test_change_with_overpayment() {
        let mut draft = draft_totaling_2600();
        draft.set_cash_received(3000);
        assert_eq!(change_due(&draft).cents(), 400);
    }

    #[test]
    fn test_change_floors_at_zero_on_underpayment() {
        let mut draft = draft_totaling_2600();
        draft.set_cash_received(2000);
        assert_eq!(change_due(&draft), Money::zero());
    }

    #[test]
    fn test_change_is_method_independent() {
        let mut draft = draft_totaling_2600();
        draft.set_cash_received(3000);
        for method in [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Mobile,
            PaymentMethod::Mixed,
        ] {
            draft.set_payment_method(method);
            assert_eq!(change_due(&draft).cents(), 400);
        }
    }

    #[test]
    fn test_cash_fields_only_for_cash_bearing_methods() {
        let mut draft = draft_totaling_2600();
        draft.set_cash_received(3000);

        draft.set_payment_method(PaymentMethod::Cash);
        assert_eq!(
            cash_fields(&draft),
            Some((Money::from_cents(3000), Money::from_cents(400)))
        );

        draft.set_payment_method(PaymentMethod::Mixed);
        assert!(cash_fields(&draft).is_some());

        draft.set_payment_method(PaymentMethod::Card);
        assert!(cash_fields(&draft).is_none());

        draft.set_payment_method(PaymentMethod::Mobile);
        assert!(cash_fields(&draft).is_none());
    }
}
