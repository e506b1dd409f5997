//! # REST Client
//!
//! The [`ApiClient`] wraps a shared [`reqwest::Client`] and exposes one
//! typed method per backend endpoint.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  fetch_products / create_sale / fetch_sale                          │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  get / post ──► bearer header (if token) ──► send                   │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  handle_response                                                    │
//! │    2xx   → deserialize wire schema (InvalidResponse on mismatch)    │
//! │    404   → NotFound with the server's message                       │
//! │    other → Server { status, message } (body text as fallback)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use champ_core::types::{Product, SubmittedSale};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::schema::{CreateSaleRequest, ErrorBody, ProductsResponse, SaleResponse};

/// Typed client for the backend REST API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ApiError::InvalidConfig(err.to_string()))?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Returns a copy of this client carrying the given bearer token.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        ApiClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            auth_token: Some(token.into()),
        }
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// `GET /products?limit=N` - fetches the product catalog.
    pub async fn fetch_products(&self, limit: u32) -> ApiResult<Vec<Product>> {
        debug!(limit, "Fetching product catalog");
        let response = self
            .get(&format!("products?limit={limit}"))
            .send()
            .await?;
        let body: ProductsResponse = Self::handle_response(response).await?;
        let products: Vec<Product> = body.products.into_iter().map(Into::into).collect();
        info!(count = products.len(), "Product catalog fetched");
        Ok(products)
    }

    /// `POST /sales` - submits a composed sale and returns the confirmed
    /// sale document.
    pub async fn create_sale(&self, request: &CreateSaleRequest) -> ApiResult<SubmittedSale> {
        debug!(
            items = request.items.len(),
            method = ?request.payment_method,
            "Submitting sale"
        );
        let response = self.post("sales", request).send().await?;
        let body: SaleResponse = Self::handle_response(response).await?;
        let sale: SubmittedSale = body.sale.into();
        info!(sale_number = %sale.sale_number, total_cents = sale.total_cents, "Sale created");
        Ok(sale)
    }

    /// `GET /sales/:id` - fetches one sale document.
    pub async fn fetch_sale(&self, id: &str) -> ApiResult<SubmittedSale> {
        debug!(%id, "Fetching sale");
        let response = self.get(&format!("sales/{id}")).send().await?;
        let body: SaleResponse = Self::handle_response(response).await?;
        Ok(body.sale.into())
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)).json(body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Maps a raw HTTP response into a typed result.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            return serde_json::from_str(&text)
                .map_err(|err| ApiError::InvalidResponse(err.to_string()));
        }

        // Failure path: try to extract the server's own message.
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);

        warn!(status = status.as_u16(), %message, "Request rejected");
        if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound { message })
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
