//! # champ-shell: Screen Orchestration for Champ POS
//!
//! Everything between the UI and the REST boundary: screen-level state
//! machines and the trait seams they run against.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   UI events                                                         │
//! │      │                                                              │
//! │      ▼                                                              │
//! │   champ-shell   composer / submission / guard / catalog / detail    │
//! │      │                                                              │
//! │      ▼  (SaleGateway / CatalogGateway traits)                       │
//! │   champ-api     reqwest client, wire schemas                        │
//! │      │                                                              │
//! │      ▼                                                              │
//! │   backend REST API                                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gateway traits are the only path to the network. Tests swap in
//! fakes; production wires in [`champ_api::ApiClient`].
//!
//! ## Modules
//! - [`catalog`]    - Product catalog cache and search suggestions
//! - [`composer`]   - Sale screen editing facade
//! - [`submission`] - Submission state machine and finalization
//! - [`guard`]      - Session, navigation intent, and route decisions
//! - [`detail`]     - Sale detail loading
//! - [`surface`]    - Receipt presentation surfaces
//! - [`cache`]      - Query cache invalidation hooks
//! - [`gateway`]    - Async trait seams over champ-api

pub mod cache;
pub mod catalog;
pub mod composer;
pub mod detail;
pub mod gateway;
pub mod guard;
pub mod submission;
pub mod surface;

pub use cache::{CachedQuery, NullCache, QueryCache};
pub use catalog::ProductCatalogCache;
pub use composer::SaleComposer;
pub use detail::{load_sale_detail, SaleDetailView};
pub use gateway::{CatalogGateway, SaleGateway};
pub use guard::{evaluate_route, NavContext, RouteDecision, Session, SessionUser};
pub use submission::{SaleSubmitter, SubmissionState, SubmitError};
pub use surface::{FileSurface, ReceiptSurface};

/// Initializes the tracing subscriber for shell binaries.
///
/// Filter comes from `RUST_LOG` when set, defaulting to `info` for our
/// crates and `warn` for everything else.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,champ_shell=info,champ_api=info,champ_core=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
