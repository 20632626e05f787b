use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::null_as_empty;
use crate::model::product::Product;
use crate::model::user::User;

/// A product review as held by the page.
///
/// `date`, `likes` and `verified` are never sent by the service. They are
/// attached client-side when the review enters the page and are skipped when
/// absent so a raw review serializes back to its wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Star rating in `1..=5`.
    pub rating: u8,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
    pub user_id: i64,
    pub product_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Review {
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }

    /// Id of the product's embedded category, `None` when either is missing.
    pub fn category_id(&self) -> Option<i64> {
        self.product.as_ref().and_then(Product::embedded_category_id)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(Product::category_name)
    }

    /// Likes counter, `0` when it was never attached.
    pub fn likes(&self) -> u32 {
        self.likes.unwrap_or(0)
    }

    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}
