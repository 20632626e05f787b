//! Search, filter and sort of the base review set.
//!
//! The displayed list is always recomputed from scratch from the base set and
//! the current [`ReviewFilters`]; it is a list of positions into the base set
//! and never owns or changes a review.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use common::model::review::Review;

/// Select value meaning "no filter".
pub const ALL: &str = "all";

/// Minimum star rating a review needs to be displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingFilter {
    #[default]
    All,
    AtLeast(u8),
}

impl RatingFilter {
    /// Options offered by the rating select, best first.
    pub const OPTIONS: [RatingFilter; 5] = [
        RatingFilter::All,
        RatingFilter::AtLeast(5),
        RatingFilter::AtLeast(4),
        RatingFilter::AtLeast(3),
        RatingFilter::AtLeast(2),
    ];

    /// Parses a select value. Anything that is not a number means [`RatingFilter::All`].
    pub fn from_value(value: &str) -> Self {
        value.trim().parse().map_or(Self::All, Self::AtLeast)
    }

    pub fn value(&self) -> String {
        match self {
            Self::All => ALL.to_string(),
            Self::AtLeast(min) => min.to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::All => "Todas las estrellas".to_string(),
            Self::AtLeast(5) => "⭐⭐⭐⭐⭐".to_string(),
            Self::AtLeast(min) => format!("{} y más", "⭐".repeat(*min as usize)),
        }
    }

    pub fn accepts(&self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::AtLeast(min) => review.rating >= *min,
        }
    }
}

/// Category a review's product must belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(i64),
}

impl CategoryFilter {
    /// Parses a select value. Anything that is not an id means [`CategoryFilter::All`].
    pub fn from_value(value: &str) -> Self {
        value.trim().parse().map_or(Self::All, Self::Only)
    }

    pub fn value(&self) -> String {
        match self {
            Self::All => ALL.to_string(),
            Self::Only(id) => id.to_string(),
        }
    }

    /// Reviews without a product category never match a specific category.
    pub fn accepts(&self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => review.category_id() == Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode `{0}`")]
pub struct UnknownSortMode(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Highest id first. Ids stand in for recency; the service sends no timestamp.
    #[default]
    Newest,
    Oldest,
    RatingHigh,
    RatingLow,
    Likes,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::RatingHigh,
        SortMode::RatingLow,
        SortMode::Likes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::RatingHigh => "rating-high",
            Self::RatingLow => "rating-low",
            Self::Likes => "likes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Más recientes",
            Self::Oldest => "Más antiguas",
            Self::RatingHigh => "Mejor valoradas",
            Self::RatingLow => "Menor valoración",
            Self::Likes => "Más útiles",
        }
    }

    pub fn compare(&self, a: &Review, b: &Review) -> Ordering {
        match self {
            Self::Newest => b.id.cmp(&a.id),
            Self::Oldest => a.id.cmp(&b.id),
            Self::RatingHigh => b.rating.cmp(&a.rating),
            Self::RatingLow => a.rating.cmp(&b.rating),
            Self::Likes => b.likes().cmp(&a.likes()),
        }
    }
}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every user-selected input of the pipeline besides the base set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilters {
    pub search: String,
    pub rating: RatingFilter,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

impl ReviewFilters {
    pub fn accepts(&self, review: &Review) -> bool {
        matches_search(review, &self.search)
            && self.rating.accepts(review)
            && self.category.accepts(review)
    }
}

/// Case-insensitive substring match on the comment, username, product name
/// and category name. An empty term matches everything.
pub fn matches_search(review: &Review, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        Some(review.comment.as_str()),
        review.username(),
        review.product_name(),
        review.category_name(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Positions in `reviews` of the displayed list, in display order.
pub fn displayed_indices(reviews: &[Review], filters: &ReviewFilters) -> Vec<usize> {
    let mut indices: Vec<usize> = reviews
        .iter()
        .enumerate()
        .filter(|(_, review)| filters.accepts(review))
        .map(|(i, _)| i)
        .collect();
    // `sort_by` is stable: ties keep base-set order.
    indices.sort_by(|&a, &b| filters.sort.compare(&reviews[a], &reviews[b]));
    indices
}

/// The displayed list as references into `reviews`.
pub fn apply<'a>(reviews: &'a [Review], filters: &ReviewFilters) -> Vec<&'a Review> {
    displayed_indices(reviews, filters)
        .into_iter()
        .map(|i| &reviews[i])
        .collect()
}
