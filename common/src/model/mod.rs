//! Wire models shared by the view-model and the browser front end.
//!
//! The shapes follow the JSON returned by the reviews service. Nested
//! associations (`Review::user`, `Review::product`, `Product::category`) are
//! the trimmed projections the service embeds, so every field that is not
//! guaranteed by those projections is optional.

pub mod category;
pub mod product;
pub mod review;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` (or a missing field, together with `#[serde(default)]`)
/// as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
