//! # champ-core: Pure Business Logic for Champ POS
//!
//! This crate is the **heart** of the Champ POS client. It contains the sale
//! composition and settlement rules, the receipt document renderer, and the
//! role navigation model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Champ POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Admin UI (TypeScript)                       │   │
//! │  │   Sale Form ──► Payment ──► Receipt      Shell Navigation   │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │                 champ-shell (Orchestration)                 │   │
//! │  │   catalog cache, composer, submitter, route guard           │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              ★ champ-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌────────┐ ┌───────┐ ┌────────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │  │ money  │ │ draft │ │ settlement │ │ receipt │ │routing│ │   │
//! │  │  │ Money  │ │ lines │ │ change due │ │  HTML   │ │ roles │ │   │
//! │  │  └────────┘ └───────┘ └────────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                       │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              champ-api (REST boundary)                      │   │
//! │  │   GET /products, POST /sales, GET /sales/:id                │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PaymentMethod, SubmittedSale, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - The in-progress sale draft and its derived totals
//! - [`settlement`] - Cash-change derivation and the payment payload rule
//! - [`validation`] - Submit-eligibility checks with per-line faults
//! - [`receipt`] - Pure transform from a submitted sale to a printable document
//! - [`routing`] - Role → route table model shared by guard and menu
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and session access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use champ_core::draft::SaleDraft;
//! use champ_core::settlement;
//!
//! let mut draft = SaleDraft::new();
//! draft.set_quantity(0, 2);
//! draft.set_unit_price(0, 1000); // CFA 10.00
//! draft.set_tax(200);            // CFA 2.00
//! draft.set_cash_received(3000); // CFA 30.00
//!
//! let totals = draft.totals();
//! assert_eq!(totals.total_cents, 2200);
//! assert_eq!(settlement::change_due(&draft).cents(), 800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod money;
pub mod receipt;
pub mod routing;
pub mod settlement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use champ_core::Money` instead of
// `use champ_core::money::Money`

pub use draft::{DraftTotals, LineItem, SaleDraft};
pub use error::{DraftError, LineFault, LineIssue};
pub use money::Money;
pub use routing::{Page, Role, RouteTable};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used for the one-shot catalog fetch (`GET /products?limit=`).
///
/// ## Why a constant?
/// The sale screen needs "all" sellable products in memory for suggestion
/// lookups. The backend caps list responses, so the client asks for a page
/// large enough to cover a full retail catalog in one request.
pub const CATALOG_FETCH_LIMIT: u32 = 1000;

/// Maximum number of product suggestions shown for a search query.
///
/// ## Business Reason
/// The suggestion dropdown under a line item is scanned by eye; more than
/// ten rows is noise for a cashier typing a name or SKU.
pub const SUGGESTION_LIMIT: usize = 10;

/// Route the client navigates to after a successful sale submission.
pub const SALES_LIST_PATH: &str = "/sales";
