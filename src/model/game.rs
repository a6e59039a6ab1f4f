use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full game mapping returned by `GET /games/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Game listing entry returned by `GET /games`. Carries no `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GameSummaryDto {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}
