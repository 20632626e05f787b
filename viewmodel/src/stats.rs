use common::model::review::Review;

/// Aggregates over the whole base review set, never the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReviewStats {
    pub total: usize,
    /// Mean star rating, `0.0` with no reviews.
    pub average_rating: f64,
    pub verified_count: usize,
    /// Share of verified reviews, rounded to a whole percent.
    pub verified_percentage: u32,
}

impl ReviewStats {
    pub fn compute(reviews: &[Review]) -> Self {
        let total = reviews.len();
        if total == 0 {
            return Self::default();
        }
        let rating_sum: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
        let verified_count = reviews.iter().filter(|r| r.is_verified()).count();
        Self {
            total,
            average_rating: rating_sum as f64 / total as f64,
            verified_count,
            verified_percentage: (100.0 * verified_count as f64 / total as f64).round() as u32,
        }
    }

    /// Average rounded to whole stars, for the star strip.
    pub fn rounded_rating(&self) -> u8 {
        self.average_rating.round() as u8
    }

    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}
