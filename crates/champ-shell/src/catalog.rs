//! # Product Catalog Cache
//!
//! In-memory snapshot of the product catalog, loaded once when the sale
//! screen mounts and consulted synchronously for search suggestions and
//! product resolution.
//!
//! ## Suggestion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cashier types "cok" in a line's search field                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  search("cok")                                                      │
//! │    • empty/whitespace needle → no suggestions                       │
//! │    • case-insensitive substring over name AND sku                   │
//! │    • catalog order preserved, capped at SUGGESTION_LIMIT            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Cashier picks "Coca-Cola 330ml" → resolve(id) → apply to line     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache never refreshes itself mid-screen; prices applied to lines
//! are frozen at selection time anyway.

use std::collections::HashMap;

use tracing::info;

use champ_api::ApiResult;
use champ_core::types::Product;
use champ_core::{CATALOG_FETCH_LIMIT, SUGGESTION_LIMIT};

use crate::gateway::CatalogGateway;

/// Immutable catalog snapshot with an id index.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalogCache {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl ProductCatalogCache {
    /// Builds a cache from an already-fetched product list.
    ///
    /// On duplicate ids the last occurrence wins the index slot; the
    /// backend does not produce duplicates in practice.
    pub fn from_products(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        ProductCatalogCache { products, index }
    }

    /// Loads the catalog through a gateway.
    pub async fn load<G: CatalogGateway>(gateway: &G) -> ApiResult<Self> {
        let products = gateway.fetch_products(CATALOG_FETCH_LIMIT).await?;
        info!(count = products.len(), "Catalog cache loaded");
        Ok(Self::from_products(products))
    }

    /// Search suggestions for a line's free-text field.
    ///
    /// Empty or whitespace-only input yields no suggestions (an empty
    /// needle would match everything). Matches are case-insensitive
    /// substrings of the product name or sku, returned in catalog order
    /// and capped at [`SUGGESTION_LIMIT`].
    pub fn search(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.matches(&needle))
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Looks a product up by id.
    pub fn resolve(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// All cached products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of cached products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cache holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use champ_api::ApiError;

    fn product(id: &str, name: &str, sku: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            price_cents: 500,
            image: None,
        }
    }

    fn cache() -> ProductCatalogCache {
        ProductCatalogCache::from_products(vec![
            product("p1", "Coca-Cola 330ml", "BEV-001"),
            product("p2", "Coca-Cola 1L", "BEV-002"),
            product("p3", "Bread", "BAK-001"),
            product("p4", "Diet Coke", "BEV-003"),
        ])
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let cache = cache();
        let names: Vec<&str> = cache.search("COCA").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coca-Cola 330ml", "Coca-Cola 1L"]);
    }

    #[test]
    fn test_search_matches_sku() {
        let cache = cache();
        let names: Vec<&str> = cache.search("bev-").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coca-Cola 330ml", "Coca-Cola 1L", "Diet Coke"]);
    }

    #[test]
    fn test_empty_needle_yields_nothing() {
        let cache = cache();
        assert!(cache.search("").is_empty());
        assert!(cache.search("   ").is_empty());
    }

    #[test]
    fn test_search_caps_at_suggestion_limit() {
        let many: Vec<Product> = (0..25)
            .map(|i| product(&format!("p{i}"), &format!("Water {i}"), &format!("WAT-{i:03}")))
            .collect();
        let cache = ProductCatalogCache::from_products(many);
        assert_eq!(cache.search("water").len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_resolve() {
        let cache = cache();
        assert_eq!(cache.resolve("p3").unwrap().name, "Bread");
        assert!(cache.resolve("missing").is_none());
    }

    struct FixedCatalog(Vec<Product>);

    #[async_trait]
    impl CatalogGateway for FixedCatalog {
        async fn fetch_products(&self, _limit: u32) -> ApiResult<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogGateway for FailingCatalog {
        async fn fetch_products(&self, _limit: u32) -> ApiResult<Vec<Product>> {
            Err(ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_through_gateway() {
        let gateway = FixedCatalog(vec![product("p1", "Coca-Cola", "BEV-001")]);
        let cache = ProductCatalogCache::load(&gateway).await.unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.resolve("p1").is_some());
    }

    #[tokio::test]
    async fn test_load_propagates_gateway_failure() {
        assert!(ProductCatalogCache::load(&FailingCatalog).await.is_err());
    }
}
