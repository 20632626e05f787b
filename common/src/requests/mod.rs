use serde::{Deserialize, Serialize};

/// Body of `POST /reviews/`, and the contents of the review form.
///
/// `product_id == 0` means no product has been picked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
    pub user_id: i64,
    pub product_id: i64,
}

impl ReviewDraft {
    pub const DEFAULT_RATING: u8 = 5;
    pub const FALLBACK_USER_ID: i64 = 1;
    pub const NO_PRODUCT: i64 = 0;

    /// Blank draft preselecting `default_user` (or user `1` when no users are loaded).
    pub fn new(default_user: Option<i64>) -> Self {
        Self {
            rating: Self::DEFAULT_RATING,
            comment: String::new(),
            user_id: default_user.unwrap_or(Self::FALLBACK_USER_ID),
            product_id: Self::NO_PRODUCT,
        }
    }
}
