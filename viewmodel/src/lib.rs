//! View-model for the product review page.
//!
//! Everything here is independent of the browser: the HTTP layer is reached
//! through [`api::HttpBackend`], randomness through
//! [`enrichment::PlaceholderSource`] and the current date is passed in by the
//! caller. The `frontend` crate supplies the browser implementations and
//! drives [`store::update`] from its component.

pub mod api;
pub mod display;
pub mod enrichment;
pub mod loader;
pub mod pipeline;
pub mod stats;
pub mod store;
pub mod submission;

#[cfg(test)]
pub(crate) mod testing;
