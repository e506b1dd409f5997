//! # Validation Module
//!
//! Submit-eligibility checks for the sale draft.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Form inputs (UI)                                          │
//! │  ├── Numeric fields, min attributes                                 │
//! │  └── Immediate feedback while typing                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (before any network call)                     │
//! │  ├── Non-empty item list                                            │
//! │  ├── Every line has a selected product                              │
//! │  ├── quantity > 0, unit price >= 0                                  │
//! │  └── Failures enumerate each offending line                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Backend (authoritative)                                   │
//! │  └── Stock levels, referential integrity                            │
//! │                                                                     │
//! │  A draft that fails here never reaches the network layer.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is deliberately NOT checked: discounts larger than the line
//! total (the total floors at zero instead) and cash received below the
//! sale total (underpayment is accepted, change floors at zero).

use crate::draft::{LineItem, SaleDraft};
use crate::error::{DraftError, LineFault, LineIssue};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, DraftError>;

/// Collects every failed predicate for a single line.
///
/// A line can fail more than one predicate at a time (e.g. no product AND
/// a negative price); all of them are reported.
pub fn line_faults(item: &LineItem) -> Vec<LineFault> {
    let mut faults = Vec::new();
    if item.product.is_none() {
        faults.push(LineFault::MissingProduct);
    }
    if item.quantity <= 0 {
        faults.push(LineFault::NonPositiveQuantity);
    }
    if item.unit_price_cents < 0 {
        faults.push(LineFault::NegativeUnitPrice);
    }
    faults
}

/// Checks whether a draft may be submitted.
///
/// ## Rules
/// - `items` must be non-empty
/// - every line must reference a catalog product
/// - every line must have `quantity > 0` and `unit_price >= 0`
///
/// ## Returns
/// `Ok(())` for a submit-eligible draft, otherwise a [`DraftError`]
/// enumerating the offending line indices and the predicate each failed.
pub fn validate_draft(draft: &SaleDraft) -> ValidationResult<()> {
    if draft.is_empty() {
        return Err(DraftError::Empty);
    }

    let issues: Vec<LineIssue> = draft
        .items
        .iter()
        .enumerate()
        .flat_map(|(line, item)| {
            line_faults(item)
                .into_iter()
                .map(move |fault| LineIssue { line, fault })
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(DraftError::InvalidLines(issues))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
