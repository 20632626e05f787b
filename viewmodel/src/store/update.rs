//! Reducer of the review page.

use log::{debug, error, info};

use super::messages::{Effect, Msg};
use super::state::{connection_error_message, LoadStatus, ReviewsState};
use crate::submission::{SubmitError, SUBMIT_FAILED_MESSAGE};

/// Applies `msg` to `state` and returns the effects the host must run.
///
/// Derived data is recomputed only when one of its inputs actually changed:
/// the displayed list on base-set or filter changes, statistics on base-set
/// changes.
pub fn update(state: &mut ReviewsState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::ReferenceDataLoaded(reference) => {
            state.form.set_default_user(reference.default_user_id());
            state.reference = reference;
            Vec::new()
        }
        Msg::ReviewsLoaded(reviews) => {
            state.reviews = reviews;
            state.status = LoadStatus::Ready;
            state.refresh_base();
            Vec::new()
        }
        Msg::LoadFailed(err) => {
            if err.is_cancelled() {
                debug!("page load cancelled");
            } else {
                error!("Error loading data: {}", err);
                state.status = LoadStatus::Failed(connection_error_message(&state.api_base));
            }
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            if state.filters.search != search {
                state.filters.search = search;
                state.refresh_displayed();
            }
            Vec::new()
        }
        Msg::RatingFilterChanged(rating) => {
            if state.filters.rating != rating {
                state.filters.rating = rating;
                state.refresh_displayed();
            }
            Vec::new()
        }
        Msg::CategoryFilterChanged(category) => {
            if state.filters.category != category {
                state.filters.category = category;
                state.refresh_displayed();
            }
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            if state.filters.sort != sort {
                state.filters.sort = sort;
                state.refresh_displayed();
            }
            Vec::new()
        }
        Msg::OpenForm => {
            if state.can_open_form() {
                state.form_open = true;
            }
            Vec::new()
        }
        Msg::CloseForm => {
            if !state.form.is_submitting() {
                state.form_open = false;
                state.form.reset();
            }
            Vec::new()
        }
        Msg::EditForm(edit) => {
            state.form.edit(edit);
            Vec::new()
        }
        Msg::SubmitRequested => match state.form.begin_submit() {
            Ok(draft) => vec![Effect::PostReview(draft)],
            Err(SubmitError::Invalid(err)) => vec![Effect::Alert(err.user_message().to_string())],
            Err(SubmitError::AlreadySubmitting) => {
                debug!("submit ignored: a review is already being posted");
                Vec::new()
            }
        },
        Msg::ReviewSubmitted(review) => {
            info!("review {} created", review.id);
            state.reviews.insert(0, review);
            state.refresh_base();
            state.form.succeed();
            state.form_open = false;
            Vec::new()
        }
        Msg::SubmissionFailed(err) => {
            state.form.fail();
            if err.is_cancelled() {
                return Vec::new();
            }
            error!("Error creating review: {}", err);
            vec![Effect::Alert(SUBMIT_FAILED_MESSAGE.to_string())]
        }
        Msg::Retry => {
            state.status = LoadStatus::Loading;
            vec![Effect::ReloadPage]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::loader::ReferenceData;
    use crate::pipeline::{RatingFilter, SortMode};
    use crate::submission::{FormEdit, SubmissionPhase, INCOMPLETE_FORM_MESSAGE};
    use crate::testing::{ids, review, with_likes};
    use common::model::user::User;
    use common::requests::ReviewDraft;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: None,
            role: None,
        }
    }

    fn ready(reviews: Vec<common::model::review::Review>) -> ReviewsState {
        let mut state = ReviewsState::new("http://svc");
        update(
            &mut state,
            Msg::ReferenceDataLoaded(ReferenceData {
                users: vec![user(3), user(4)],
                ..ReferenceData::default()
            }),
        );
        update(&mut state, Msg::ReviewsLoaded(reviews));
        state
    }

    #[test]
    fn starts_loading_with_form_closed() {
        let mut state = ReviewsState::new("http://svc");
        assert!(state.is_loading());
        update(&mut state, Msg::OpenForm);
        assert!(!state.is_form_open());
    }

    #[test]
    fn reference_data_sets_default_user() {
        let state = ready(Vec::new());
        assert_eq!(state.form().draft().user_id, 3);
        assert_eq!(state.status(), &LoadStatus::Ready);
    }

    #[test]
    fn load_failure_is_fatal_and_names_the_backend() {
        let mut state = ReviewsState::new("http://svc");
        update(&mut state, Msg::LoadFailed(TransportError::Status { status: 500 }));
        assert!(state.fatal_error().unwrap().contains("http://svc"));
        assert!(state.reviews().is_empty());
    }

    #[test]
    fn cancelled_load_is_not_an_error() {
        let mut state = ReviewsState::new("http://svc");
        update(&mut state, Msg::LoadFailed(TransportError::Cancelled));
        assert!(state.is_loading());
    }

    #[test]
    fn filter_changes_recompute_displayed_list() {
        let mut state = ready(vec![with_likes(review(1, 5), 10), with_likes(review(2, 3), 20)]);
        assert_eq!(ids(state.displayed()), vec![2, 1]);

        update(&mut state, Msg::SortChanged(SortMode::Oldest));
        assert_eq!(ids(state.displayed()), vec![1, 2]);

        update(&mut state, Msg::RatingFilterChanged(RatingFilter::AtLeast(4)));
        assert_eq!(ids(state.displayed()), vec![1]);
        // Statistics stay on the full base set.
        assert_eq!(state.stats().total, 2);
        assert_eq!(state.stats().average_rating, 4.0);
    }

    #[test]
    fn invalid_submit_alerts_without_posting() {
        let mut state = ready(Vec::new());
        update(&mut state, Msg::OpenForm);
        update(&mut state, Msg::EditForm(FormEdit::Comment("Great".into())));

        let effects = update(&mut state, Msg::SubmitRequested);

        assert_eq!(effects, vec![Effect::Alert(INCOMPLETE_FORM_MESSAGE.to_string())]);
        assert_eq!(state.form().phase(), SubmissionPhase::Editing);
        assert_eq!(state.form().draft().comment, "Great");
        assert!(state.is_form_open());
    }

    #[test]
    fn successful_submission_prepends_and_resets() {
        let mut state = ready(vec![review(1, 5)]);
        update(&mut state, Msg::OpenForm);
        for edit in [
            FormEdit::Rating(4),
            FormEdit::Comment("Great".into()),
            FormEdit::User(2),
            FormEdit::Product(5),
        ] {
            update(&mut state, Msg::EditForm(edit));
        }

        let effects = update(&mut state, Msg::SubmitRequested);
        let draft = ReviewDraft {
            rating: 4,
            comment: "Great".into(),
            user_id: 2,
            product_id: 5,
        };
        assert_eq!(effects, vec![Effect::PostReview(draft)]);
        assert!(update(&mut state, Msg::SubmitRequested).is_empty());
        update(&mut state, Msg::CloseForm);
        assert!(state.is_form_open());

        let mut created = review(2, 4);
        created.likes = Some(0);
        created.verified = Some(false);
        assert!(update(&mut state, Msg::ReviewSubmitted(created)).is_empty());

        assert_eq!(ids(state.reviews()), vec![2, 1]);
        assert_eq!(state.reviews()[0].likes, Some(0));
        assert_eq!(state.reviews()[0].verified, Some(false));
        assert_eq!(state.stats().total, 2);
        assert!(!state.is_form_open());
        assert_eq!(state.form().draft(), &ReviewDraft::new(Some(3)));
    }

    #[test]
    fn failed_submission_alerts_and_keeps_form() {
        let mut state = ready(Vec::new());
        update(&mut state, Msg::OpenForm);
        update(&mut state, Msg::EditForm(FormEdit::Product(5)));
        update(&mut state, Msg::EditForm(FormEdit::Comment("Great".into())));
        update(&mut state, Msg::SubmitRequested);

        let effects = update(
            &mut state,
            Msg::SubmissionFailed(TransportError::Status { status: 400 }),
        );

        assert_eq!(effects, vec![Effect::Alert(SUBMIT_FAILED_MESSAGE.to_string())]);
        assert!(state.is_form_open());
        assert_eq!(state.form().phase(), SubmissionPhase::Editing);
        assert_eq!(state.form().draft().comment, "Great");
        assert!(state.reviews().is_empty());

        let retry = update(&mut state, Msg::SubmitRequested);
        assert!(matches!(
            retry.as_slice(),
            [Effect::PostReview(draft)] if draft.comment == "Great"
        ));
    }

    #[test]
    fn closing_the_form_discards_the_draft() {
        let mut state = ready(Vec::new());
        update(&mut state, Msg::OpenForm);
        update(&mut state, Msg::EditForm(FormEdit::Product(5)));
        update(&mut state, Msg::EditForm(FormEdit::Comment("A medias".into())));

        update(&mut state, Msg::CloseForm);
        update(&mut state, Msg::OpenForm);

        assert!(state.is_form_open());
        assert_eq!(state.form().draft(), &ReviewDraft::new(Some(3)));
    }

    #[test]
    fn retry_reloads_the_page() {
        let mut state = ReviewsState::new("http://svc");
        update(&mut state, Msg::LoadFailed(TransportError::Network("down".into())));
        assert_eq!(update(&mut state, Msg::Retry), vec![Effect::ReloadPage]);
        assert!(state.is_loading());
    }
}
