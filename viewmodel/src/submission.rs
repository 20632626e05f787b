//! Review form and its submission state machine.
//!
//! ```text
//! Editing -> Validating -> Submitting -> Succeeded -> Editing (reset)
//!               |                      \-> Failed    -> Editing (contents kept)
//!               +--> Editing (invalid)
//! ```
//!
//! `Succeeded` and `Failed` are passed through, not rested in: `succeed` and
//! `fail` report the outcome they reached and leave the form `Editing`.
//!
//! Only one submission can be in flight: `begin_submit` refuses to start a
//! second one while the form is `Submitting`, and edits are ignored meanwhile.

use chrono::NaiveDate;
use common::model::review::Review;
use common::requests::ReviewDraft;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, HttpBackend, TransportError};
use crate::enrichment::enrich_submitted;

/// Text shown when the form is incomplete.
pub const INCOMPLETE_FORM_MESSAGE: &str = "Por favor completa todos los campos";
/// Text shown when the service rejects or cannot receive a submission.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Error al crear la reseña. Verifica que el backend esté funcionando.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no product selected")]
    MissingProduct,
    #[error("comment is empty")]
    EmptyComment,
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        INCOMPLETE_FORM_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// A single field change coming from the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Rating(u8),
    Comment(String),
    User(i64),
    Product(i64),
}

pub fn validate(draft: &ReviewDraft) -> Result<(), ValidationError> {
    if draft.product_id == ReviewDraft::NO_PRODUCT {
        return Err(ValidationError::MissingProduct);
    }
    if draft.comment.trim().is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    if !(1..=5).contains(&draft.rating) {
        return Err(ValidationError::RatingOutOfRange(draft.rating));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    draft: ReviewDraft,
    phase: SubmissionPhase,
    default_user: Option<i64>,
}

impl ReviewForm {
    pub fn new(default_user: Option<i64>) -> Self {
        Self {
            draft: ReviewDraft::new(default_user),
            phase: SubmissionPhase::Editing,
            default_user,
        }
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The submit and close controls are disabled while this holds.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Changes the user preselected on reset and resets the form.
    pub fn set_default_user(&mut self, default_user: Option<i64>) {
        self.default_user = default_user;
        self.reset();
    }

    /// Applies `edit` unless a submission is in flight. Returns whether the draft changed.
    pub fn edit(&mut self, edit: FormEdit) -> bool {
        if self.is_submitting() {
            debug!("ignoring form edit while submitting");
            return false;
        }
        self.phase = SubmissionPhase::Editing;
        match edit {
            FormEdit::Rating(rating) => self.draft.rating = rating,
            FormEdit::Comment(comment) => self.draft.comment = comment,
            FormEdit::User(id) => self.draft.user_id = id,
            FormEdit::Product(id) => self.draft.product_id = id,
        }
        true
    }

    /// Validates the draft and, when valid, enters `Submitting` and returns
    /// the draft to post. An invalid draft leaves the form in `Editing`
    /// with its contents untouched.
    pub fn begin_submit(&mut self) -> Result<ReviewDraft, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.phase = SubmissionPhase::Validating;
        if let Err(err) = validate(&self.draft) {
            debug!("review draft rejected: {}", err);
            self.phase = SubmissionPhase::Editing;
            return Err(err.into());
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(self.draft.clone())
    }

    /// The service accepted the draft: back to a blank form.
    pub fn succeed(&mut self) -> SubmissionPhase {
        debug!("review submission succeeded");
        self.reset();
        SubmissionPhase::Succeeded
    }

    /// The submission failed: contents are kept for correction or retry.
    pub fn fail(&mut self) -> SubmissionPhase {
        debug!("review submission failed");
        self.phase = SubmissionPhase::Editing;
        SubmissionPhase::Failed
    }

    pub fn reset(&mut self) {
        self.draft = ReviewDraft::new(self.default_user);
        self.phase = SubmissionPhase::Editing;
    }
}

/// Posts `draft` and enriches the created review for insertion in the base set.
pub async fn submit_review<B: HttpBackend>(
    client: &ApiClient<B>,
    draft: &ReviewDraft,
    today: NaiveDate,
    cancel: &CancellationToken,
) -> Result<Review, TransportError> {
    let created = client.create_review(draft, cancel).await?;
    Ok(enrich_submitted(created, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form: &mut ReviewForm) {
        form.edit(FormEdit::Product(5));
        form.edit(FormEdit::Comment("Great".into()));
        form.edit(FormEdit::Rating(4));
        form.edit(FormEdit::User(2));
    }

    #[test]
    fn starts_with_defaults() {
        let form = ReviewForm::new(Some(3));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.draft(), &ReviewDraft::new(Some(3)));
    }

    #[test]
    fn missing_product_blocks_and_keeps_comment() {
        let mut form = ReviewForm::new(None);
        form.edit(FormEdit::Comment("Buena bici".into()));

        let err = form.begin_submit().unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::MissingProduct));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.draft().comment, "Buena bici");
    }

    #[test]
    fn whitespace_comment_is_rejected() {
        let mut form = ReviewForm::new(None);
        form.edit(FormEdit::Product(5));
        form.edit(FormEdit::Comment("   \n".into()));
        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::EmptyComment))
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut draft = ReviewDraft::new(None);
        draft.product_id = 1;
        draft.comment = "ok".into();
        draft.rating = 0;
        assert_eq!(validate(&draft), Err(ValidationError::RatingOutOfRange(0)));
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = ReviewForm::new(Some(1));
        filled(&mut form);

        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.product_id, 5);
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));
        assert!(!form.edit(FormEdit::Comment("changed".into())));
        assert_eq!(form.draft().comment, "Great");
    }

    #[test]
    fn success_resets_to_defaults() {
        let mut form = ReviewForm::new(Some(1));
        filled(&mut form);
        form.begin_submit().unwrap();

        assert_eq!(form.succeed(), SubmissionPhase::Succeeded);

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.draft(), &ReviewDraft::new(Some(1)));
    }

    #[test]
    fn failure_keeps_contents_and_allows_retry() {
        let mut form = ReviewForm::new(Some(1));
        filled(&mut form);
        form.begin_submit().unwrap();

        assert_eq!(form.fail(), SubmissionPhase::Failed);

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.draft().comment, "Great");
        assert_eq!(form.draft().product_id, 5);
        let retried = form.begin_submit().unwrap();
        assert_eq!(retried.comment, "Great");
    }
}
