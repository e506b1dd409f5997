//! # Sale Submission
//!
//! The submission lifecycle for one sale screen: a small state machine
//! around the POST, plus the finalization steps that run after the
//! backend confirms the sale.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │              validation fails: NO transition, no network            │
//! │                  ┌──────┐                                           │
//! │                  │      │                                           │
//! │                  ▼      │                                           │
//! │   ┌──────┐   submit   ┌─┴──────────┐   backend ok   ┌───────────┐   │
//! │   │ Idle │ ─────────► │ Submitting │ ─────────────► │ Succeeded │   │
//! │   └──────┘            └─────┬──────┘                └───────────┘   │
//! │      ▲                      │ backend error            (terminal:   │
//! │      │    retry allowed     ▼                           draft is    │
//! │      │                ┌───────────┐                     consumed)   │
//! │      └─────────────── │  Failed   │                                 │
//! │        (next submit)  │ {message} │                                 │
//! │                       └───────────┘                                 │
//! │                                                                     │
//! │   At most one request in flight; submit while Submitting is         │
//! │   rejected without touching the network.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## After Success
//! Finalization invalidates the stale list/dashboard queries, renders the
//! receipt from the confirmed sale, hands it to the receipt surface (a
//! surface failure is logged, never propagated), and reports the sales
//! list as the screen to navigate to.

use thiserror::Error;
use tracing::{error, info, warn};

use champ_api::CreateSaleRequest;
use champ_core::draft::SaleDraft;
use champ_core::error::DraftError;
use champ_core::receipt::{render_receipt, ReceiptTotals};
use champ_core::settlement;
use champ_core::types::SubmittedSale;
use champ_core::SALES_LIST_PATH;

use crate::cache::{CachedQuery, QueryCache};
use crate::gateway::SaleGateway;
use crate::surface::ReceiptSurface;

// =============================================================================
// State
// =============================================================================

/// Lifecycle of one sale screen's submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission attempted yet.
    Idle,
    /// A request is in flight; further submits are rejected.
    Submitting,
    /// The backend rejected the sale; the draft is intact and the cashier
    /// may edit and retry.
    Failed { message: String },
    /// The sale exists on the backend. Terminal; this screen's draft is
    /// consumed and a new screen starts a new lifecycle.
    Succeeded,
}

/// Why a submit call did not produce a sale.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DraftError),

    /// A previous submission is still in flight.
    ///
    /// `submit` takes `&mut self`, so a single-owner submitter cannot
    /// observe this: the exclusive borrow already serializes calls. The
    /// guard exists for hosts that surface [`SubmissionState`] across
    /// await points (e.g. behind a lock shared with the render loop).
    #[error("a submission is already in progress")]
    InFlight,

    /// The screen's sale already succeeded; the draft is consumed.
    #[error("sale already completed")]
    Consumed,

    /// The backend rejected the sale or the request failed.
    #[error("{message}")]
    Backend { message: String },
}

// =============================================================================
// Submitter
// =============================================================================

/// Drives the submission state machine for one sale screen.
#[derive(Debug)]
pub struct SaleSubmitter<G> {
    gateway: G,
    state: SubmissionState,
}

impl<G: SaleGateway> SaleSubmitter<G> {
    pub fn new(gateway: G) -> Self {
        SaleSubmitter {
            gateway,
            state: SubmissionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Validates and submits the draft.
    ///
    /// Validation failure leaves the state machine untouched and performs
    /// no network call. A backend failure moves to `Failed` but keeps the
    /// draft retryable. Success is terminal for this submitter.
    pub async fn submit(&mut self, draft: &SaleDraft) -> Result<SubmittedSale, SubmitError> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitError::InFlight),
            SubmissionState::Succeeded => return Err(SubmitError::Consumed),
            SubmissionState::Idle | SubmissionState::Failed { .. } => {}
        }

        // Validation gate: failures never reach the network and never
        // change the submission state.
        champ_core::validation::validate_draft(draft)?;

        self.state = SubmissionState::Submitting;
        let request = CreateSaleRequest::from_draft(draft);

        match self.gateway.create_sale(&request).await {
            Ok(sale) => {
                info!(sale_number = %sale.sale_number, "Sale submission succeeded");
                self.state = SubmissionState::Succeeded;
                Ok(sale)
            }
            Err(err) => {
                let message = err.user_message();
                error!(%err, "Sale submission failed");
                self.state = SubmissionState::Failed {
                    message: message.clone(),
                };
                Err(SubmitError::Backend { message })
            }
        }
    }
}

// =============================================================================
// Finalization
// =============================================================================

/// Result of a completed sale flow: the confirmed sale and where the
/// screen should navigate next.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleOutcome {
    pub sale: SubmittedSale,
    pub navigate_to: &'static str,
}

/// Footer totals for the receipt, captured from the draft at submit time.
///
/// Subtotal/tax/total mirror what the summary panel showed the cashier;
/// per-line amounts on the receipt itself come from the confirmed sale.
fn receipt_totals(draft: &SaleDraft) -> ReceiptTotals {
    let totals = draft.totals();
    ReceiptTotals {
        subtotal: totals.subtotal(),
        tax: champ_core::money::Money::from_cents(draft.tax_cents),
        total: totals.total(),
        cash_received: draft.cash_received(),
        change: settlement::change_due(draft),
    }
}

/// Runs the full submit-and-finalize flow for the sale screen.
///
/// On success: invalidates the sales list and daily stats queries,
/// renders and presents the receipt (presentation failure is logged and
/// swallowed), and returns the sales list as the navigation target.
pub async fn complete_sale<G, C, S>(
    submitter: &mut SaleSubmitter<G>,
    draft: &SaleDraft,
    cache: &C,
    surface: &S,
) -> Result<SaleOutcome, SubmitError>
where
    G: SaleGateway,
    C: QueryCache + ?Sized,
    S: ReceiptSurface + ?Sized,
{
    let totals = receipt_totals(draft);
    let sale = submitter.submit(draft).await?;

    cache.invalidate(CachedQuery::SalesList);
    cache.invalidate(CachedQuery::DailyStats);

    let document = render_receipt(&sale, &totals);
    if let Err(err) = surface.present(&sale.sale_number, &document) {
        // The sale exists regardless; a print problem must not fail it.
        warn!(%err, sale_number = %sale.sale_number, "Receipt presentation failed");
    }

    Ok(SaleOutcome {
        sale,
        navigate_to: SALES_LIST_PATH,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
