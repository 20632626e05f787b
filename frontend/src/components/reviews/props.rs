//! Properties of the `ReviewsPage` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewsPageProps {
    /// Base address of the reviews service.
    ///
    /// When absent, the value of `API_BASE_URL` at build time is used, and
    /// `http://127.0.0.1:8000` when that is unset too.
    #[prop_or_default]
    pub api_base_url: Option<AttrValue>,
}
