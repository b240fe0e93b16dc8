use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const TITLE_MAX_CHARS: usize = 80;
pub const BODY_MAX_CHARS: usize = 2000;

/// One piece of tenant feedback on a property, as served by the review API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub property_id: String,
    #[serde(default)]
    pub rental_agreement_id: Option<String>,
    pub rating: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    /// Dimension ratings the server may attach; carried through updates
    /// untouched.
    #[serde(default)]
    pub sub_ratings: Option<serde_json::Value>,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    /// How many times the review was reported. Admin visibility signal.
    #[serde(default)]
    pub reports_count: u32,
}

/// Lifecycle state of a review. Transitions are role-gated; see
/// [`crate::moderation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Published,
    Hidden,
    Removed,
    RemovedByTenant,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Published => "PUBLISHED",
            ReviewStatus::Hidden => "HIDDEN",
            ReviewStatus::Removed => "REMOVED",
            ReviewStatus::RemovedByTenant => "REMOVED_BY_TENANT",
        }
    }
}

/// Tenant eligibility to write one review for a verified stay. Sourced from
/// the API, never derived locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOption {
    pub property_id: String,
    #[serde(default)]
    pub property_name: Option<String>,
    pub rental_agreement_id: String,
    #[serde(default)]
    pub agreement_status: String,
}

impl WriteOption {
    pub fn property_label(&self) -> &str {
        self.property_name.as_deref().unwrap_or(&self.property_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
}

/// Paginated list envelope used by the role-specific review endpoints.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

/// Body of `POST /api/properties/{propertyId}/reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub rental_agreement_id: String,
    pub rating: i32,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub photo_urls: Vec<String>,
}

/// Body of `PUT /api/reviews/{reviewId}`. Server-owned extras from the
/// existing review (`subRatings`, `tags`, `photoUrls`) pass through as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub rating: i32,
    pub sub_ratings: Option<serde_json::Value>,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub photo_urls: Vec<String>,
}

/// User-entered rating/title/body, before validation.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub rating: i32,
    pub title: String,
    pub body: String,
}

impl ReviewDraft {
    /// Checks the field invariants and returns the trimmed values, or the
    /// first failing field. No network traffic happens on failure.
    pub fn validated(&self) -> Result<ReviewDraft, ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::new(
                "rating",
                "Rating must be between 1 and 5",
            ));
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new("title", "Title is required"));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::new(
                "title",
                format!("Title must be {} characters or fewer", TITLE_MAX_CHARS),
            ));
        }

        let body = self.body.trim();
        if body.is_empty() {
            return Err(ValidationError::new("body", "Review body is required"));
        }
        if body.chars().count() > BODY_MAX_CHARS {
            return Err(ValidationError::new(
                "body",
                format!("Review body must be {} characters or fewer", BODY_MAX_CHARS),
            ));
        }

        Ok(ReviewDraft {
            rating: self.rating,
            title: title.to_string(),
            body: body.to_string(),
        })
    }
}
