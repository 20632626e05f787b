use common::model::review::Review;
use common::requests::ReviewDraft;

use crate::api::TransportError;
use crate::loader::ReferenceData;
use crate::pipeline::{CategoryFilter, RatingFilter, SortMode};
use crate::submission::FormEdit;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ReferenceDataLoaded(ReferenceData),
    /// Enriched reviews from the initial load.
    ReviewsLoaded(Vec<Review>),
    LoadFailed(TransportError),
    SearchChanged(String),
    RatingFilterChanged(RatingFilter),
    CategoryFilterChanged(CategoryFilter),
    SortChanged(SortMode),
    OpenForm,
    CloseForm,
    EditForm(FormEdit),
    SubmitRequested,
    /// Enriched review created by the service.
    ReviewSubmitted(Review),
    SubmissionFailed(TransportError),
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking notification.
    Alert(String),
    PostReview(ReviewDraft),
    ReloadPage,
}
