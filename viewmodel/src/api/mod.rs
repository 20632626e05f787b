//! Transport client for the reviews service.
//!
//! - `config`: base address and path resolution.
//! - `error`: the `TransportError` every call fails with.
//! - `client`: the `HttpBackend` seam and the JSON `ApiClient` on top of it.

mod client;
mod config;
mod error;

pub use client::{
    ApiClient, HttpBackend, HttpRequest, HttpResponse, Method, CATEGORIES_PATH, PRODUCTS_PATH,
    REVIEWS_PATH, USERS_PATH,
};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::TransportError;
