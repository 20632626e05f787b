//! Initial page load: reference data first, then reviews.
//!
//! The three reference collections are fetched concurrently and all of them
//! are required. Reviews are fetched only once reference data is in, and a
//! failure there leaves the page usable with no reviews.

use chrono::NaiveDate;
use common::model::category::Category;
use common::model::product::Product;
use common::model::review::Review;
use common::model::user::User;
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, HttpBackend, TransportError};
use crate::enrichment::{enrich_loaded, PlaceholderSource};

/// Categories, products and users, read-only for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub users: Vec<User>,
}

impl ReferenceData {
    /// User preselected in a fresh review form.
    pub fn default_user_id(&self) -> Option<i64> {
        self.users.first().map(|u| u.id)
    }
}

/// Result of a complete page load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub reference: ReferenceData,
    /// Enriched base review set.
    pub reviews: Vec<Review>,
}

/// Fetches the three reference collections concurrently. Fails with the
/// first error to arrive.
pub async fn load_reference_data<B: HttpBackend>(
    client: &ApiClient<B>,
    cancel: &CancellationToken,
) -> Result<ReferenceData, TransportError> {
    let (categories, products, users) = futures::try_join!(
        client.categories(cancel),
        client.products(cancel),
        client.users(cancel)
    )?;
    info!(
        "reference data loaded: {} categories, {} products, {} users",
        categories.len(),
        products.len(),
        users.len()
    );
    Ok(ReferenceData {
        categories,
        products,
        users,
    })
}

/// Fetches the raw reviews. Any failure other than cancellation is logged and
/// becomes an empty set.
pub async fn load_reviews<B: HttpBackend>(
    client: &ApiClient<B>,
    cancel: &CancellationToken,
) -> Result<Vec<Review>, TransportError> {
    match client.reviews(cancel).await {
        Ok(reviews) => {
            info!("{} reviews loaded", reviews.len());
            Ok(reviews)
        }
        Err(TransportError::Cancelled) => Err(TransportError::Cancelled),
        Err(err) => {
            warn!("No reviews found or error loading reviews: {}", err);
            Ok(Vec::new())
        }
    }
}

/// Runs the whole load: reference data, then reviews, then enrichment.
///
/// An `Err` is always fatal for the page (or a cancellation).
pub async fn load_page<B, P>(
    client: &ApiClient<B>,
    today: NaiveDate,
    placeholders: &mut P,
    cancel: &CancellationToken,
) -> Result<PageData, TransportError>
where
    B: HttpBackend,
    P: PlaceholderSource + ?Sized,
{
    let reference = load_reference_data(client, cancel).await?;
    let raw = load_reviews(client, cancel).await?;
    Ok(PageData {
        reference,
        reviews: enrich_loaded(raw, today, placeholders),
    })
}
