use common::model::category::Category;
use common::model::product::Product;
use common::model::review::Review;
use common::model::user::User;

use crate::loader::ReferenceData;
use crate::pipeline::{displayed_indices, ReviewFilters};
use crate::stats::ReviewStats;
use crate::submission::ReviewForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Reference data could not be loaded; carries the text of the error view.
    Failed(String),
}

pub fn connection_error_message(api_base: &str) -> String {
    format!(
        "Error al conectar con el backend. \
         Asegúrate de que el servidor de reseñas esté ejecutándose en {}",
        api_base
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsState {
    pub(super) status: LoadStatus,
    pub(super) api_base: String,
    pub(super) reference: ReferenceData,
    /// Base review set, newest submission first.
    pub(super) reviews: Vec<Review>,
    pub(super) filters: ReviewFilters,
    /// Positions in `reviews`, in display order.
    pub(super) displayed: Vec<usize>,
    pub(super) stats: ReviewStats,
    pub(super) form: ReviewForm,
    pub(super) form_open: bool,
}

impl ReviewsState {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            status: LoadStatus::Loading,
            api_base: api_base.into(),
            reference: ReferenceData::default(),
            reviews: Vec::new(),
            filters: ReviewFilters::default(),
            displayed: Vec::new(),
            stats: ReviewStats::default(),
            form: ReviewForm::new(None),
            form_open: false,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn fatal_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn categories(&self) -> &[Category] {
        &self.reference.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.reference.products
    }

    pub fn users(&self) -> &[User] {
        &self.reference.users
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn filters(&self) -> &ReviewFilters {
        &self.filters
    }

    pub fn displayed(&self) -> impl Iterator<Item = &Review> + '_ {
        self.displayed.iter().map(|&i| &self.reviews[i])
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn stats(&self) -> &ReviewStats {
        &self.stats
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn can_open_form(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub(super) fn refresh_displayed(&mut self) {
        self.displayed = displayed_indices(&self.reviews, &self.filters);
    }

    /// Recomputes everything derived from the base set.
    pub(super) fn refresh_base(&mut self) {
        self.refresh_displayed();
        self.stats = ReviewStats::compute(&self.reviews);
    }
}
