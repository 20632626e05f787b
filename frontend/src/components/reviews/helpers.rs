//! Browser-side helpers for the review page: alerts, page reload, the current
//! date and the random source for simulated review fields.

use chrono::NaiveDate;
use viewmodel::enrichment::SampledPlaceholders;

/// Blocking notification.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        window.location().reload().ok();
    }
}

/// Local calendar date, stamped on reviews as they enter the page.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Simulated likes/verification for loaded reviews, drawn from `Math.random`.
pub fn browser_placeholders() -> SampledPlaceholders<fn() -> f64> {
    SampledPlaceholders::new(js_sys::Math::random as fn() -> f64)
}
