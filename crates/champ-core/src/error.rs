//! # Error Types
//!
//! Domain-specific error types for champ-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  champ-core errors (this file)                                      │
//! │  └── DraftError       - Submit-eligibility failures, per line       │
//! │                                                                     │
//! │  champ-api errors (separate crate)                                  │
//! │  └── ApiError         - Transport/server failures                   │
//! │                                                                     │
//! │  champ-shell errors                                                 │
//! │  └── SubmitError      - What the sale screen surfaces               │
//! │                                                                     │
//! │  Flow: DraftError ─┐                                                │
//! │                    ├──► SubmitError ──► UI toast                    │
//! │        ApiError  ──┘                                                │
//! │                                                                     │
//! │  Validation failures never reach the network layer.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line index, failed predicate)
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Line Faults
// =============================================================================

/// The predicate a single draft line failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum LineFault {
    /// No product was selected from the catalog for this line.
    #[error("product is required")]
    MissingProduct,

    /// Quantity is zero or negative.
    #[error("quantity must be positive")]
    NonPositiveQuantity,

    /// Unit price is negative.
    #[error("unit price cannot be negative")]
    NegativeUnitPrice,
}

/// A failed predicate tied to the line (display order) it occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[error("line {line}: {fault}")]
pub struct LineIssue {
    /// Zero-based index into the draft's item list.
    pub line: usize,
    /// Which predicate failed.
    pub fault: LineFault,
}

// =============================================================================
// Draft Error
// =============================================================================

/// Why a draft is not submit-eligible.
///
/// Surfaced directly in the UI before any network call is made; a draft
/// with a `DraftError` never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum DraftError {
    /// The draft has no line items at all.
    #[error("sale has no items")]
    Empty,

    /// One or more lines failed validation; every offending line is listed.
    #[error("{}", format_issues(.0))]
    InvalidLines(Vec<LineIssue>),
}

impl DraftError {
    /// The offending line issues, empty for [`DraftError::Empty`].
    pub fn issues(&self) -> &[LineIssue] {
        match self {
            DraftError::Empty => &[],
            DraftError::InvalidLines(issues) => issues,
        }
    }
}

fn format_issues(issues: &[LineIssue]) -> String {
    let parts: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    format!("invalid sale items: {}", parts.join("; "))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_issue_message() {
        let issue = LineIssue {
            line: 2,
            fault: LineFault::NonPositiveQuantity,
        };
        assert_eq!(issue.to_string(), "line 2: quantity must be positive");
    }

    #[test]
    fn test_draft_error_enumerates_lines() {
        let err = DraftError::InvalidLines(vec![
            LineIssue {
                line: 0,
                fault: LineFault::MissingProduct,
            },
            LineIssue {
                line: 3,
                fault: LineFault::NegativeUnitPrice,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid sale items: line 0: product is required; line 3: unit price cannot be negative"
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_empty_draft_message() {
        assert_eq!(DraftError::Empty.to_string(), "sale has no items");
        assert!(DraftError::Empty.issues().is_empty());
    }
}
