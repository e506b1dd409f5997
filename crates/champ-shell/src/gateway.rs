//! # Gateway Traits
//!
//! Async seams between screen orchestration and the REST boundary.
//!
//! ## Why Traits Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  production:   SaleSubmitter ──► SaleGateway ──► ApiClient ──► HTTP │
//! │  tests:        SaleSubmitter ──► SaleGateway ──► fake (in memory)   │
//! │                                                                     │
//! │  Submission/catalog/detail logic is exercised without a server;     │
//! │  only champ-api's own code touches reqwest.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use champ_api::{ApiClient, ApiResult, CreateSaleRequest};
use champ_core::types::{Product, SubmittedSale};

/// Source of the product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches up to `limit` products.
    async fn fetch_products(&self, limit: u32) -> ApiResult<Vec<Product>>;
}

/// Sale creation and lookup.
#[async_trait]
pub trait SaleGateway: Send + Sync {
    /// Submits a composed sale; returns the confirmed document.
    async fn create_sale(&self, request: &CreateSaleRequest) -> ApiResult<SubmittedSale>;

    /// Fetches one sale by id.
    async fn fetch_sale(&self, id: &str) -> ApiResult<SubmittedSale>;
}

#[async_trait]
impl CatalogGateway for ApiClient {
    async fn fetch_products(&self, limit: u32) -> ApiResult<Vec<Product>> {
        ApiClient::fetch_products(self, limit).await
    }
}

#[async_trait]
impl SaleGateway for ApiClient {
    async fn create_sale(&self, request: &CreateSaleRequest) -> ApiResult<SubmittedSale> {
        ApiClient::create_sale(self, request).await
    }

    async fn fetch_sale(&self, id: &str) -> ApiResult<SubmittedSale> {
        ApiClient::fetch_sale(self, id).await
    }
}
