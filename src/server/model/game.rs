//! Game domain model.
//!
//! Games are fixture data: the API only reads them.

use chrono::{DateTime, Utc};

use crate::model::game::{GameDto, GameSummaryDto};

/// A game offered for review.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            platform: entity.platform,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the game into the full mapping served by `GET /games/{id}`.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the game into the listing entry served by `GET /games`.
    ///
    /// Only title, genre, platform and price are kept.
    pub fn into_summary_dto(self) -> GameSummaryDto {
        GameSummaryDto {
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            price: self.price,
        }
    }
}
