//! # Sale Detail
//!
//! Loads one sale for the detail screen and folds the outcome into a
//! view the screen can render directly: the sale, a friendly "not found"
//! state, or an error banner.

use tracing::warn;

use champ_api::ApiError;
use champ_core::types::SubmittedSale;

use crate::gateway::SaleGateway;

/// What the sale detail screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleDetailView {
    /// The sale was found.
    Loaded(SubmittedSale),
    /// No sale with that id; the screen shows its "sale not found" state.
    Missing,
    /// The lookup failed for another reason; shown as an error banner.
    Error(String),
}

/// Fetches a sale and maps the result for the detail screen.
pub async fn load_sale_detail<G: SaleGateway>(gateway: &G, id: &str) -> SaleDetailView {
    match gateway.fetch_sale(id).await {
        Ok(sale) => SaleDetailView::Loaded(sale),
        Err(ApiError::NotFound { .. }) => SaleDetailView::Missing,
        Err(err) => {
            warn!(%id, %err, "Sale detail load failed");
            SaleDetailView::Error(err.user_message())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use champ_api::{ApiResult, CreateSaleRequest};
    use champ_core::types::{PaymentMethod, SaleStatus};

    struct OneSale;

    #[async_trait]
    impl SaleGateway for OneSale {
        async fn create_sale(&self, _request: &CreateSaleRequest) -> ApiResult<SubmittedSale> {
            unimplemented!("not used in detail tests")
        }

        async fn fetch_sale(&self, id: &str) -> ApiResult<SubmittedSale> {
            match id {
                "65a1" => Ok(SubmittedSale {
                    id: "65a1".into(),
                    sale_number: "S-000123".into(),
                    created_at: Utc::now(),
                    items: vec![],
                    subtotal_cents: 0,
                    tax_cents: 0,
                    total_cents: 0,
                    payment_method: PaymentMethod::Card,
                    payment_details: Default::default(),
                    status: SaleStatus::Completed,
                }),
                "down" => Err(ApiError::Server {
                    status: 503,
                    message: "maintenance".to_string(),
                }),
                _ => Err(ApiError::NotFound {
                    message: "Sale not found".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_loaded() {
        match load_sale_detail(&OneSale, "65a1").await {
            SaleDetailView::Loaded(sale) => assert_eq!(sale.sale_number, "S-000123"),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing() {
        assert_eq!(load_sale_detail(&OneSale, "ghost").await, SaleDetailView::Missing);
    }

    #[tokio::test]
    async fn test_error_carries_server_message() {
        assert_eq!(
            load_sale_detail(&OneSale, "down").await,
            SaleDetailView::Error("maintenance".to_string())
        );
    }
}
