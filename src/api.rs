use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{Role, Session};
use crate::error::ApiError;
use crate::moderation::{AdminAction, OwnerAction};
use crate::review::{NewReview, Page, Property, Review, ReviewUpdate, WriteOption};

/// The review API surface the workflow depends on. `mutate` operations
/// report success or failure only; deciding to re-list afterwards is the
/// caller's job.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Rebinds the repository to a different acting session (role switch).
    fn set_session(&mut self, session: Session);

    async fn list_reviews(&self, role: Role, size: u32) -> Result<Vec<Review>, ApiError>;
    async fn list_write_options(&self) -> Result<Vec<WriteOption>, ApiError>;
    async fn list_properties(&self) -> Result<Vec<Property>, ApiError>;
    async fn create_review(&self, property_id: &str, payload: &NewReview) -> Result<(), ApiError>;
    async fn update_review(&self, review_id: &str, payload: &ReviewUpdate)
        -> Result<(), ApiError>;
    async fn delete_review(&self, review_id: &str) -> Result<(), ApiError>;
    async fn owner_moderate(
        &self,
        review_id: &str,
        action: OwnerAction,
        note: Option<&str>,
    ) -> Result<(), ApiError>;
    async fn owner_reply(&self, review_id: &str, text: &str) -> Result<(), ApiError>;
    async fn admin_moderate(
        &self,
        review_id: &str,
        action: AdminAction,
        note: Option<&str>,
    ) -> Result<(), ApiError>;
}

/// Reqwest-backed client for the RentEase review API. Carries the acting
/// session explicitly; every request sends the role and user-id headers
/// derived from it.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request with the session headers attached and applies the
    /// shared response protocol: 204 yields no payload, other 2xx yield the
    /// JSON body, non-2xx become an `ApiError` carrying the server's
    /// `message` field when one is present.
    async fn send(&self, request: RequestBuilder) -> Result<Option<serde_json::Value>, ApiError> {
        let response = request
            .header("X-ROLE", self.session.role().as_str())
            .header("X-USER-ID", self.session.user_id())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "request failed before reaching the API");
                ApiError::transport(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            warn!(status = status.as_u16(), %message, "API returned an error");
            return Err(ApiError::status(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to read response body: {}", e)))?;
        Ok(Some(body))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(%path, role = %self.session.role(), "GET");
        let body = self
            .send(self.client.get(self.url(path)).query(query))
            .await?
            .ok_or_else(|| ApiError::transport("Empty response where a body was expected"))?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    }

    /// POST with a JSON body, discarding any response payload.
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        debug!(%path, role = %self.session.role(), "POST");
        self.send(self.client.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    fn note_body(note: Option<&str>) -> serde_json::Value {
        match note {
            Some(note) => serde_json::json!({ "note": note }),
            None => serde_json::json!({}),
        }
    }
}

#[async_trait]
impl ReviewRepository for ApiClient {
    fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    async fn list_reviews(&self, role: Role, size: u32) -> Result<Vec<Review>, ApiError> {
        let path = match role {
            Role::Tenant => "/api/reviews/me",
            Role::Owner => "/api/owner/reviews",
            Role::Admin => "/api/admin/reviews",
        };
        let page: Page<Review> = self.get(path, &[("size", size.to_string())]).await?;
        Ok(page.content)
    }

    async fn list_write_options(&self) -> Result<Vec<WriteOption>, ApiError> {
        self.get("/api/reviews/me/write-options", &[]).await
    }

    async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.get("/api/properties", &[]).await
    }

    async fn create_review(&self, property_id: &str, payload: &NewReview) -> Result<(), ApiError> {
        let path = format!("/api/properties/{}/reviews", property_id);
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::transport(format!("Failed to encode review: {}", e)))?;
        self.post(&path, &body).await
    }

    async fn update_review(
        &self,
        review_id: &str,
        payload: &ReviewUpdate,
    ) -> Result<(), ApiError> {
        let path = format!("/api/reviews/{}", review_id);
        debug!(%path, "PUT");
        self.send(self.client.put(self.url(&path)).json(payload))
            .await?;
        Ok(())
    }

    async fn delete_review(&self, review_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/reviews/{}", review_id);
        debug!(%path, "DELETE");
        self.send(self.client.delete(self.url(&path))).await?;
        Ok(())
    }

    async fn owner_moderate(
        &self,
        review_id: &str,
        action: OwnerAction,
        note: Option<&str>,
    ) -> Result<(), ApiError> {
        let path = format!("/api/owner/reviews/{}/{}", review_id, action.segment());
        self.post(&path, &Self::note_body(note)).await
    }

    async fn owner_reply(&self, review_id: &str, text: &str) -> Result<(), ApiError> {
        let path = format!("/api/owner/reviews/{}/reply", review_id);
        self.post(&path, &serde_json::json!({ "text": text })).await
    }

    async fn admin_moderate(
        &self,
        review_id: &str,
        action: AdminAction,
        note: Option<&str>,
    ) -> Result<(), ApiError> {
        let path = format!("/api/admin/reviews/{}/{}", review_id, action.segment());
        self.post(&path, &Self::note_body(note)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tenant_client(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri(), Session::new(Role::Tenant, None))
    }

    #[tokio::test]
    async fn list_reviews_sends_session_headers_and_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reviews/me"))
            .and(query_param("size", "50"))
            .and(header("X-ROLE", "tenant"))
            .and(header("X-USER-ID", "tenant_atheeq"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{
                    "id": "rev-1",
                    "propertyId": "prop-1",
                    "rating": 5,
                    "title": "Great stay",
                    "body": "Loved it",
                    "status": "PUBLISHED",
                    "createdAt": "2025-10-01T08:00:00Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reviews = tenant_client(&server)
            .list_reviews(Role::Tenant, 50)
            .await
            .unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, "rev-1");
    }

    #[tokio::test]
    async fn role_selects_the_list_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/reviews"))
            .and(header("X-ROLE", "admin"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "content": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Session::new(Role::Admin, None));
        let reviews = client.list_reviews(Role::Admin, 20).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn create_posts_the_exact_payload() {
        let server = MockServer::start().await;
        let expected = serde_json::json!({
            "rentalAgreementId": "agr-7",
            "rating": 5,
            "title": "Great stay",
            "body": "Loved it",
            "tags": [],
            "photoUrls": []
        });
        Mock::given(method("POST"))
            .and(path("/api/properties/prop-1/reviews"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let payload = NewReview {
            rental_agreement_id: "agr-7".to_string(),
            rating: 5,
            title: "Great stay".to_string(),
            body: "Loved it".to_string(),
            tags: Vec::new(),
            photo_urls: Vec::new(),
        };
        tenant_client(&server)
            .create_review("prop-1", &payload)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn error_message_comes_from_the_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/reviews/rev-1"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "Review is locked for moderation"
            })))
            .mount(&server)
            .await;

        let err = tenant_client(&server)
            .delete_review("rev-1")
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message, "Review is locked for moderation");
    }

    #[tokio::test]
    async fn error_without_json_body_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reviews/me/write-options"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = tenant_client(&server)
            .list_write_options()
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(500));
        assert_eq!(err.message, "Request failed (500)");
    }

    #[tokio::test]
    async fn no_content_response_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/reviews/rev-2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        tenant_client(&server).delete_review("rev-2").await.unwrap();
    }

    #[tokio::test]
    async fn owner_moderation_hits_the_verb_path_with_note() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/owner/reviews/rev-3/hide"))
            .and(body_json(&serde_json::json!({ "note": "spam" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Session::new(Role::Owner, None));
        client
            .owner_moderate("rev-3", OwnerAction::Hide, Some("spam"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn admin_moderation_without_note_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/reviews/rev-4/restore"))
            .and(body_json(&serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Session::new(Role::Admin, None));
        client
            .admin_moderate("rev-4", AdminAction::Restore, None)
            .await
            .unwrap();
    }
}
