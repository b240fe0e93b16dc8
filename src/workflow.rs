//! Review moderation workflow: owns the visible review list for the current
//! session, gates mutating actions client-side, and re-synchronizes from the
//! API after every successful mutation.

use tracing::{debug, info};

use crate::api::ReviewRepository;
use crate::config::{Role, Session};
use crate::error::{ApiError, Error, ValidationError};
use crate::moderation::{AdminAction, OwnerAction, TenantAction};
use crate::review::{NewReview, Property, Review, ReviewDraft, ReviewUpdate, WriteOption};

/// What a mutating action did after running its client-side gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The API call succeeded and the lists were reloaded.
    Completed,
    /// A guard refused the action without contacting the API: another
    /// mutation was in flight, or the review's current status does not
    /// permit it.
    Skipped,
}

/// Tenant input for creating a review against a verified stay.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub property_id: String,
    pub rental_agreement_id: String,
    pub draft: ReviewDraft,
}

/// Everything one load cycle fetches.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub reviews: Vec<Review>,
    pub write_options: Vec<WriteOption>,
    pub properties: Vec<Property>,
}

pub struct ReviewWorkflow<R> {
    repo: R,
    session: Session,
    page_size: u32,
    reviews: Vec<Review>,
    write_options: Vec<WriteOption>,
    properties: Vec<Property>,
    /// Inline banner from the last failed load cycle.
    load_error: Option<String>,
    /// Mutual-exclusion token: id of the review (or agreement, for creates)
    /// whose mutation is currently in flight.
    acting_id: Option<String>,
    /// Monotonic token identifying the latest issued load; responses tagged
    /// with an older token are discarded.
    request_token: u64,
}

impl<R: ReviewRepository> ReviewWorkflow<R> {
    pub fn new(repo: R, session: Session, page_size: u32) -> Self {
        Self {
            repo,
            session,
            page_size,
            reviews: Vec::new(),
            write_options: Vec::new(),
            properties: Vec::new(),
            load_error: None,
            acting_id: None,
            request_token: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn write_options(&self) -> &[WriteOption] {
        &self.write_options
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_acting(&self) -> bool {
        self.acting_id.is_some()
    }

    /// Display name for a property, falling back to the raw id.
    pub fn property_name<'a>(&'a self, property_id: &'a str) -> &'a str {
        self.properties
            .iter()
            .find(|property| property.id == property_id)
            .map(|property| property.name.as_str())
            .unwrap_or(property_id)
    }

    /// Switches the acting role. The lists are cleared and any in-flight
    /// load is invalidated so a slow response for the previous role cannot
    /// overwrite the new role's view.
    pub fn switch_role(&mut self, role: Role) {
        if role == self.session.role() {
            return;
        }
        info!(from = %self.session.role(), to = %role, "switching role");
        self.session = self.session.with_role(role);
        self.repo.set_session(self.session.clone());
        self.request_token += 1;
        self.reviews.clear();
        self.write_options.clear();
        self.load_error = None;
    }

    /// Full load cycle. Fetch failures never propagate: they empty the list
    /// and set the inline banner instead.
    pub async fn load(&mut self) {
        let token = self.begin_load();
        let snapshot = self.fetch_snapshot().await;
        self.apply_snapshot(token, snapshot);
    }

    fn begin_load(&mut self) -> u64 {
        self.request_token += 1;
        self.request_token
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        let role = self.session.role();
        let reviews = self.repo.list_reviews(role, self.page_size).await?;
        let properties = self.repo.list_properties().await?;
        let write_options = if role == Role::Tenant {
            self.repo.list_write_options().await?
        } else {
            Vec::new()
        };
        Ok(Snapshot {
            reviews,
            write_options,
            properties,
        })
    }

    /// Applies a load result if its token is still current. Returns whether
    /// the result was applied; stale responses are discarded silently.
    fn apply_snapshot(&mut self, token: u64, result: Result<Snapshot, ApiError>) -> bool {
        if token != self.request_token {
            debug!(token, current = self.request_token, "discarding stale load response");
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.reviews = snapshot.reviews;
                self.write_options = snapshot.write_options;
                self.properties = snapshot.properties;
                self.load_error = None;
            }
            Err(e) => {
                self.reviews.clear();
                self.write_options.clear();
                self.load_error = Some(e.message);
            }
        }
        true
    }

    /// Tenant creation. Validates locally (first failing field wins, no
    /// network call on violation), checks the agreement against the known
    /// write options, then POSTs and reloads.
    pub async fn create_review(&mut self, form: &CreateForm) -> Result<Outcome, Error> {
        if self.session.role() != Role::Tenant || self.is_acting() {
            return Ok(Outcome::Skipped);
        }

        if form.property_id.is_empty() {
            return Err(ValidationError::new("propertyId", "Please select a property").into());
        }
        if form.rental_agreement_id.is_empty() {
            return Err(ValidationError::new(
                "rentalAgreementId",
                "Please select a verified rental agreement",
            )
            .into());
        }
        let draft = form.draft.validated()?;

        let option = self
            .write_options
            .iter()
            .find(|option| option.rental_agreement_id == form.rental_agreement_id);
        if !option.is_some_and(|option| option.property_id == form.property_id) {
            return Err(ValidationError::new(
                "rentalAgreementId",
                "Selected agreement does not match selected property",
            )
            .into());
        }

        let payload = NewReview {
            rental_agreement_id: form.rental_agreement_id.clone(),
            rating: draft.rating,
            title: draft.title,
            body: draft.body,
            tags: Vec::new(),
            photo_urls: Vec::new(),
        };

        self.acting_id = Some(form.rental_agreement_id.clone());
        let result = self.repo.create_review(&form.property_id, &payload).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    /// Tenant edit. Same field validation as create, no agreement re-check.
    /// Only permitted while the review is still published.
    pub async fn edit_review(&mut self, review_id: &str, draft: &ReviewDraft) -> Result<Outcome, Error> {
        if self.session.role() != Role::Tenant || self.is_acting() {
            return Ok(Outcome::Skipped);
        }
        let Some(review) = self.find_review(review_id) else {
            return Ok(Outcome::Skipped);
        };
        if !TenantAction::Edit.permitted(review.status) {
            return Ok(Outcome::Skipped);
        }

        let draft = draft.validated()?;
        let payload = ReviewUpdate {
            rating: draft.rating,
            sub_ratings: review.sub_ratings.clone(),
            title: draft.title,
            body: draft.body,
            tags: review.tags.clone(),
            photo_urls: review.photo_urls.clone(),
        };

        self.acting_id = Some(review_id.to_string());
        let result = self.repo.update_review(review_id, &payload).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    pub async fn delete_review(&mut self, review_id: &str) -> Result<Outcome, Error> {
        if self.session.role() != Role::Tenant || self.is_acting() {
            return Ok(Outcome::Skipped);
        }
        let Some(review) = self.find_review(review_id) else {
            return Ok(Outcome::Skipped);
        };
        if !TenantAction::Delete.permitted(review.status) {
            return Ok(Outcome::Skipped);
        }

        self.acting_id = Some(review_id.to_string());
        let result = self.repo.delete_review(review_id).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    /// Owner hide/unhide. Refuses without a network call when the review's
    /// current status does not match the action's precondition; this guards
    /// against stale-state double-submission, not against the owner.
    pub async fn owner_act(&mut self, review_id: &str, action: OwnerAction) -> Result<Outcome, Error> {
        if self.session.role() != Role::Owner || self.is_acting() {
            return Ok(Outcome::Skipped);
        }
        let Some(review) = self.find_review(review_id) else {
            return Ok(Outcome::Skipped);
        };
        if !action.permitted(review.status) {
            return Ok(Outcome::Skipped);
        }

        self.acting_id = Some(review_id.to_string());
        let result = self.repo.owner_moderate(review_id, action, None).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    /// Owner public reply to a review.
    pub async fn owner_reply(&mut self, review_id: &str, text: &str) -> Result<Outcome, Error> {
        if self.session.role() != Role::Owner || self.is_acting() {
            return Ok(Outcome::Skipped);
        }
        if self.find_review(review_id).is_none() {
            return Ok(Outcome::Skipped);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::new("text", "Reply text is required").into());
        }

        self.acting_id = Some(review_id.to_string());
        let result = self.repo.owner_reply(review_id, text).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    pub async fn admin_act(&mut self, review_id: &str, action: AdminAction) -> Result<Outcome, Error> {
        if self.session.role() != Role::Admin || self.is_acting() {
            return Ok(Outcome::Skipped);
        }
        let Some(review) = self.find_review(review_id) else {
            return Ok(Outcome::Skipped);
        };
        if !action.permitted(review.status) {
            return Ok(Outcome::Skipped);
        }

        self.acting_id = Some(review_id.to_string());
        let result = self.repo.admin_moderate(review_id, action, None).await;
        self.acting_id = None;
        result?;

        self.load().await;
        Ok(Outcome::Completed)
    }

    fn find_review(&self, review_id: &str) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == review_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewStatus;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the review API. Records every call and applies
    /// the server-side status transitions so reload cycles observe them.
    #[derive(Default, Clone)]
    struct FakeRepo {
        calls: Arc<Mutex<Vec<String>>>,
        reviews: Arc<Mutex<Vec<Review>>>,
        write_options: Arc<Mutex<Vec<WriteOption>>>,
        fail_lists: Arc<Mutex<bool>>,
        fail_mutations: Arc<Mutex<bool>>,
    }

    impl FakeRepo {
        fn log(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn mutation_gate(&self) -> Result<(), ApiError> {
            if *self.fail_mutations.lock().unwrap() {
                Err(ApiError::status(409, "Review is locked"))
            } else {
                Ok(())
            }
        }

        fn set_status(&self, review_id: &str, status: ReviewStatus) {
            let mut reviews = self.reviews.lock().unwrap();
            if let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) {
                review.status = status;
            }
        }
    }

    #[async_trait]
    impl ReviewRepository for FakeRepo {
        fn set_session(&mut self, _session: Session) {}

        async fn list_reviews(&self, _role: Role, _size: u32) -> Result<Vec<Review>, ApiError> {
            self.log("list_reviews");
            if *self.fail_lists.lock().unwrap() {
                return Err(ApiError::status(503, "Service unavailable"));
            }
            Ok(self.reviews.lock().unwrap().clone())
        }

        async fn list_write_options(&self) -> Result<Vec<WriteOption>, ApiError> {
            self.log("list_write_options");
            Ok(self.write_options.lock().unwrap().clone())
        }

        async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
            self.log("list_properties");
            Ok(Vec::new())
        }

        async fn create_review(
            &self,
            property_id: &str,
            payload: &NewReview,
        ) -> Result<(), ApiError> {
            self.log("create_review");
            self.mutation_gate()?;
            self.reviews.lock().unwrap().push(review(
                "rev-new",
                property_id,
                payload.rating,
                ReviewStatus::Published,
            ));
            Ok(())
        }

        async fn update_review(
            &self,
            review_id: &str,
            payload: &ReviewUpdate,
        ) -> Result<(), ApiError> {
            self.log("update_review");
            self.mutation_gate()?;
            let mut reviews = self.reviews.lock().unwrap();
            if let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) {
                review.rating = payload.rating;
                review.title = payload.title.clone();
                review.body = payload.body.clone();
            }
            Ok(())
        }

        async fn delete_review(&self, review_id: &str) -> Result<(), ApiError> {
            self.log("delete_review");
            self.mutation_gate()?;
            self.reviews.lock().unwrap().retain(|r| r.id != review_id);
            Ok(())
        }

        async fn owner_moderate(
            &self,
            review_id: &str,
            action: OwnerAction,
            _note: Option<&str>,
        ) -> Result<(), ApiError> {
            self.log(&format!("owner_{}", action.segment()));
            self.mutation_gate()?;
            let status = match action {
                OwnerAction::Hide => ReviewStatus::Hidden,
                OwnerAction::Unhide => ReviewStatus::Published,
            };
            self.set_status(review_id, status);
            Ok(())
        }

        async fn owner_reply(&self, _review_id: &str, _text: &str) -> Result<(), ApiError> {
            self.log("owner_reply");
            self.mutation_gate()
        }

        async fn admin_moderate(
            &self,
            review_id: &str,
            action: AdminAction,
            _note: Option<&str>,
        ) -> Result<(), ApiError> {
            self.log(&format!("admin_{}", action.segment()));
            self.mutation_gate()?;
            let status = match action {
                AdminAction::Hide => ReviewStatus::Hidden,
                AdminAction::Unhide | AdminAction::Restore => ReviewStatus::Published,
                AdminAction::Remove => ReviewStatus::Removed,
            };
            self.set_status(review_id, status);
            Ok(())
        }
    }

    fn review(id: &str, property_id: &str, rating: i32, status: ReviewStatus) -> Review {
        Review {
            id: id.to_string(),
            property_id: property_id.to_string(),
            rental_agreement_id: None,
            rating,
            title: "A stay".to_string(),
            body: "It was fine.".to_string(),
            tags: Vec::new(),
            photo_urls: Vec::new(),
            sub_ratings: None,
            status,
            created_at: Utc::now(),
            reports_count: 0,
        }
    }

    fn write_option(property_id: &str, agreement_id: &str) -> WriteOption {
        WriteOption {
            property_id: property_id.to_string(),
            property_name: None,
            rental_agreement_id: agreement_id.to_string(),
            agreement_status: "COMPLETED".to_string(),
        }
    }

    fn workflow(role: Role, repo: &FakeRepo) -> ReviewWorkflow<FakeRepo> {
        ReviewWorkflow::new(repo.clone(), Session::new(role, None), 50)
    }

    fn create_form(property_id: &str, agreement_id: &str, rating: i32) -> CreateForm {
        CreateForm {
            property_id: property_id.to_string(),
            rental_agreement_id: agreement_id.to_string(),
            draft: ReviewDraft {
                rating,
                title: "Great stay".to_string(),
                body: "Loved it".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn create_with_invalid_rating_makes_no_network_call() {
        let repo = FakeRepo::default();
        repo.write_options
            .lock()
            .unwrap()
            .push(write_option("prop-1", "agr-1"));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let err = workflow
            .create_review(&create_form("prop-1", "agr-1", 6))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.field == "rating"));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn create_with_mismatched_agreement_is_rejected_locally() {
        let repo = FakeRepo::default();
        repo.write_options
            .lock()
            .unwrap()
            .push(write_option("prop-1", "agr-1"));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let err = workflow
            .create_review(&create_form("prop-2", "agr-1", 5))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.field == "rentalAgreementId"));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_create_posts_once_then_reloads() {
        let repo = FakeRepo::default();
        repo.write_options
            .lock()
            .unwrap()
            .push(write_option("prop-1", "agr-1"));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let outcome = workflow
            .create_review(&create_form("prop-1", "agr-1", 5))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            repo.calls(),
            vec![
                "create_review",
                "list_reviews",
                "list_properties",
                "list_write_options"
            ]
        );
        assert_eq!(workflow.reviews().len(), 1);
        assert_eq!(workflow.reviews()[0].status, ReviewStatus::Published);
        assert!(!workflow.is_acting());
    }

    #[tokio::test]
    async fn owner_unhide_publishes_a_hidden_review() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 3, ReviewStatus::Hidden));
        let mut workflow = workflow(Role::Owner, &repo);
        workflow.load().await;

        let outcome = workflow
            .owner_act("rev-1", OwnerAction::Unhide)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(workflow.reviews()[0].status, ReviewStatus::Published);
    }

    #[tokio::test]
    async fn owner_hide_on_hidden_review_is_a_silent_no_op() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 3, ReviewStatus::Hidden));
        let mut workflow = workflow(Role::Owner, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let outcome = workflow.owner_act("rev-1", OwnerAction::Hide).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(repo.calls().is_empty());
        assert_eq!(workflow.reviews()[0].status, ReviewStatus::Hidden);
    }

    #[tokio::test]
    async fn admin_remove_then_restore_round_trips_through_removed() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 2, ReviewStatus::Published));
        let mut workflow = workflow(Role::Admin, &repo);
        workflow.load().await;

        workflow.admin_act("rev-1", AdminAction::Remove).await.unwrap();
        assert_eq!(workflow.reviews()[0].status, ReviewStatus::Removed);

        workflow.admin_act("rev-1", AdminAction::Restore).await.unwrap();
        assert_eq!(workflow.reviews()[0].status, ReviewStatus::Published);
    }

    #[tokio::test]
    async fn admin_restore_on_published_review_is_rejected_without_network() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 2, ReviewStatus::Published));
        let mut workflow = workflow(Role::Admin, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let outcome = workflow
            .admin_act("rev-1", AdminAction::Restore)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn second_action_while_one_is_in_flight_is_refused() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Published));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        // Simulate the first click's request still being in flight.
        workflow.acting_id = Some("rev-1".to_string());
        let outcome = workflow.delete_review("rev-1").await.unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(repo.calls().is_empty());

        // Once it settles, the action goes through exactly once.
        workflow.acting_id = None;
        let outcome = workflow.delete_review("rev-1").await.unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            repo.calls().iter().filter(|c| *c == "delete_review").count(),
            1
        );
    }

    #[tokio::test]
    async fn stale_load_response_is_discarded_after_role_switch() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Published));
        let mut workflow = workflow(Role::Tenant, &repo);

        let token = workflow.begin_load();
        let pending = workflow.fetch_snapshot().await;
        workflow.switch_role(Role::Owner);

        assert!(!workflow.apply_snapshot(token, pending));
        assert!(workflow.reviews().is_empty());

        // The load issued for the new role still applies.
        let token = workflow.begin_load();
        let fresh = workflow.fetch_snapshot().await;
        assert!(workflow.apply_snapshot(token, fresh));
        assert_eq!(workflow.reviews().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_empties_the_list_and_sets_the_banner() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Published));
        let mut workflow = workflow(Role::Owner, &repo);
        workflow.load().await;
        assert_eq!(workflow.reviews().len(), 1);

        *repo.fail_lists.lock().unwrap() = true;
        workflow.load().await;
        assert!(workflow.reviews().is_empty());
        assert_eq!(workflow.load_error(), Some("Service unavailable"));
    }

    #[tokio::test]
    async fn failed_mutation_leaves_the_list_untouched_and_clears_the_guard() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Published));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;

        *repo.fail_mutations.lock().unwrap() = true;
        let err = workflow.delete_review("rev-1").await.unwrap_err();
        assert!(matches!(err, Error::Api(ref e) if e.status == Some(409)));
        assert_eq!(workflow.reviews().len(), 1);
        assert!(!workflow.is_acting());
    }

    #[tokio::test]
    async fn edit_is_refused_for_hidden_reviews() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Hidden));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let draft = ReviewDraft {
            rating: 3,
            title: "Updated".to_string(),
            body: "Changed my mind".to_string(),
        };
        let outcome = workflow.edit_review("rev-1", &draft).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn edit_with_overlong_title_fails_before_any_call() {
        let repo = FakeRepo::default();
        repo.reviews
            .lock()
            .unwrap()
            .push(review("rev-1", "prop-1", 4, ReviewStatus::Published));
        let mut workflow = workflow(Role::Tenant, &repo);
        workflow.load().await;
        repo.calls.lock().unwrap().clear();

        let draft = ReviewDraft {
            rating: 3,
            title: "t".repeat(81),
            body: "Changed my mind".to_string(),
        };
        let err = workflow.edit_review("rev-1", &draft).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.field == "title"));
        assert!(repo.calls().is_empty());
    }
}
