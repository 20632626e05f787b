//! Text shown for a review card and the form selects.

use chrono::NaiveDate;
use common::model::product::Product;
use common::model::review::Review;

pub fn reviewer_name(review: &Review) -> String {
    review
        .username()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Usuario {}", review.user_id))
}

pub fn product_name(review: &Review) -> String {
    review
        .product_name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Producto {}", review.product_id))
}

/// First letter of the username, upper-cased, or `U`.
pub fn avatar_initial(review: &Review) -> String {
    review
        .username()
        .and_then(|name| name.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

pub fn comment_text(review: &Review) -> &str {
    if review.comment.is_empty() {
        "Sin comentario"
    } else {
        &review.comment
    }
}

pub fn date_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "Hoy".to_string())
}

pub fn likes_label(review: &Review) -> String {
    format!("{} útiles", review.likes())
}

/// Label of a product in the form select.
pub fn product_option_label(product: &Product) -> String {
    match product.description.as_deref() {
        Some(description) if !description.is_empty() => {
            format!("{} - {}", product.name, description)
        }
        _ => product.name.clone(),
    }
}
