//! Attaches the UI-only fields (`date`, `likes`, `verified`) to reviews as
//! they enter the page.
//!
//! The service does not provide likes or verification yet, so reviews loaded
//! from it get simulated values from a [`PlaceholderSource`]. Reviews created
//! from the form always start at zero likes and unverified.

use chrono::NaiveDate;
use common::model::review::Review;

/// Upper bound (exclusive) of the simulated likes counter.
pub const SIMULATED_LIKES_CAP: u32 = 50;

/// Supplies the simulated fields of a loaded review.
pub trait PlaceholderSource {
    fn likes(&mut self) -> u32;
    fn verified(&mut self) -> bool;
}

/// Derives placeholders from a uniform sampler over `[0, 1)`.
///
/// The browser passes `Math.random`; tests pass a scripted sequence.
pub struct SampledPlaceholders<F> {
    sample: F,
}

impl<F: FnMut() -> f64> SampledPlaceholders<F> {
    pub fn new(sample: F) -> Self {
        Self { sample }
    }
}

impl<F: FnMut() -> f64> PlaceholderSource for SampledPlaceholders<F> {
    fn likes(&mut self) -> u32 {
        let x = (self.sample)().clamp(0.0, 1.0);
        ((x * SIMULATED_LIKES_CAP as f64).floor() as u32).min(SIMULATED_LIKES_CAP - 1)
    }

    fn verified(&mut self) -> bool {
        (self.sample)() > 0.5
    }
}

/// Always yields the same values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPlaceholders {
    pub likes: u32,
    pub verified: bool,
}

impl PlaceholderSource for FixedPlaceholders {
    fn likes(&mut self) -> u32 {
        self.likes
    }

    fn verified(&mut self) -> bool {
        self.verified
    }
}

/// Enriches the reviews returned by the initial load.
pub fn enrich_loaded<P>(reviews: Vec<Review>, today: NaiveDate, source: &mut P) -> Vec<Review>
where
    P: PlaceholderSource + ?Sized,
{
    reviews
        .into_iter()
        .map(|mut review| {
            review.date = Some(today);
            review.likes = Some(source.likes());
            review.verified = Some(source.verified());
            review
        })
        .collect()
}

/// Enriches a review the service just created from the form.
pub fn enrich_submitted(mut review: Review, today: NaiveDate) -> Review {
    review.date = Some(today);
    review.likes = Some(0);
    review.verified = Some(false);
    review
}
