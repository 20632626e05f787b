//! Product review page: root module wiring the Yew `Component` to the
//! view-model store.
//!
//! Responsibilities
//! - Own the `ReviewsState` store and feed every `Msg` through `store::update`.
//! - Run the effects the reducer returns (posting a review, alerts, reload)
//!   and send their outcome back as messages.
//! - On first render, load reference data and reviews.
//! - Cancel in-flight requests when the component is destroyed.

use std::rc::Rc;

use tokio_util::sync::CancellationToken;
use viewmodel::api::{ApiClient, ApiConfig};
use viewmodel::loader::load_page;
use viewmodel::store::{self, Effect, Msg, ReviewsState};
use viewmodel::submission::submit_review;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod props;
mod view;

use crate::transport::GlooBackend;
use helpers::{alert, browser_placeholders, reload_page, today};
pub use props::ReviewsPageProps;

pub struct ReviewsPage {
    pub store: ReviewsState,
    client: Rc<ApiClient<GlooBackend>>,
    /// Cancelled on destroy; every request of this page observes it.
    cancel: CancellationToken,
    loaded: bool,
}

impl ReviewsPage {
    fn run_effect(&self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::Alert(message) => alert(&message),
            Effect::ReloadPage => reload_page(),
            Effect::PostReview(draft) => {
                let client = self.client.clone();
                let cancel = self.cancel.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match submit_review(&client, &draft, today(), &cancel).await {
                        Ok(review) => link.send_message(Msg::ReviewSubmitted(review)),
                        Err(err) => link.send_message(Msg::SubmissionFailed(err)),
                    }
                });
            }
        }
    }

    fn start_load(&self, ctx: &Context<Self>) {
        let client = self.client.clone();
        let cancel = self.cancel.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let mut placeholders = browser_placeholders();
            match load_page(&client, today(), &mut placeholders, &cancel).await {
                Ok(page) => link.send_message_batch(vec![
                    Msg::ReferenceDataLoaded(page.reference),
                    Msg::ReviewsLoaded(page.reviews),
                ]),
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }
}

impl Component for ReviewsPage {
    type Message = Msg;
    type Properties = ReviewsPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = match &ctx.props().api_base_url {
            Some(base) => ApiConfig::new(base.as_str()),
            None => ApiConfig::from_env_value(option_env!("API_BASE_URL")),
        };
        Self {
            store: ReviewsState::new(config.base_url()),
            client: Rc::new(ApiClient::new(config, GlooBackend)),
            cancel: CancellationToken::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        for effect in store::update(&mut self.store, msg) {
            self.run_effect(ctx, effect);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.start_load(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel.cancel();
    }
}
