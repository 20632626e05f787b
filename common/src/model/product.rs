use serde::{Deserialize, Serialize};

use crate::model::category::Category;

/// A reviewable product.
///
/// `category`, when embedded, always describes the category referenced by
/// `category_id`. The review endpoints embed the category but omit
/// `category_id`; the product list does the opposite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Product {
    /// Id of the embedded category. The flat `category_id` is not consulted:
    /// a product without an embedded category belongs to no category here.
    pub fn embedded_category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id)
    }

    /// Name of the embedded category, if any.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}
