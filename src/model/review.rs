use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form-encoded review payload used by both `POST /reviews` and `PATCH /reviews/{id}`.
///
/// These four fields are the only keys ever read from a review form; serde drops any
/// other key (including `id`). Values stay raw strings so that the server can report
/// a field-level validation error instead of a generic decoding failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct ReviewFormDto {
    pub score: Option<String>,
    pub comment: Option<String>,
    pub game_id: Option<String>,
    pub user_id: Option<String>,
}

/// Body returned by a successful `DELETE /reviews/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DeleteReviewDto {
    pub delete_successful: bool,
    pub message: String,
}
