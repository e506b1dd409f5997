//! # champ-api: REST Boundary for Champ POS
//!
//! Everything that touches the backend REST API lives here: the reqwest
//! client, the wire schemas, and the client configuration.
//!
//! ## Endpoints Consumed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Backend REST Surface                            │
//! │                                                                     │
//! │  GET  /products?limit=N   → { products: [...] }   catalog feed      │
//! │  POST /sales              → { sale: {...} }       sale submission   │
//! │  GET  /sales/:id          → { sale: {...} }       detail view       │
//! │                                                                     │
//! │  Failure bodies: { message: string, errors?: { field: msg } }       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse-or-Fail
//! Responses are deserialized into explicit wire schemas exactly once, at
//! this boundary. A malformed response is an [`ApiError::InvalidResponse`]
//! here, never a sprinkling of defensive `Option` chains upstream.
//!
//! ## Modules
//! - [`client`] - The [`ApiClient`] and request plumbing
//! - [`schema`] - Wire types and decimal ⇄ cents conversion
//! - [`config`] - TOML/env configuration for the client
//! - [`error`]  - [`ApiError`]

pub mod client;
pub mod config;
pub mod error;
pub mod schema;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use schema::CreateSaleRequest;
