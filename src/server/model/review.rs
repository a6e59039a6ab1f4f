//! Review domain models and parameters.
//!
//! Provides the review domain model together with the parameter types for creating and
//! partially updating reviews. Parameters are built from the submitted form, which is
//! where the required-field and integer checks happen.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{ReviewDto, ReviewFormDto},
    server::{error::validation::ValidationError, util::parse::parse_i32_field},
};

/// A user's review of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub score: i32,
    pub comment: String,
    /// ID of the reviewed game.
    pub game_id: i32,
    /// ID of the reviewing user.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            score: entity.score,
            comment: entity.comment,
            game_id: entity.game_id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the review domain model to a DTO for API responses.
    ///
    /// The game and user are emitted as ids only.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            score: self.score,
            comment: self.comment,
            game_id: self.game_id,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParams {
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
}

impl CreateReviewParams {
    /// Builds creation parameters from a submitted form.
    ///
    /// All four fields are required. `score`, `game_id` and `user_id` must be integers.
    ///
    /// # Returns
    /// - `Ok(CreateReviewParams)` - All fields present and well formed
    /// - `Err(ValidationError::MissingField)` - A field was not submitted
    /// - `Err(ValidationError::InvalidInteger)` - A numeric field failed to parse
    pub fn from_form(form: ReviewFormDto) -> Result<Self, ValidationError> {
        let score = form.score.ok_or(ValidationError::MissingField("score"))?;
        let comment = form.comment.ok_or(ValidationError::MissingField("comment"))?;
        let game_id = form.game_id.ok_or(ValidationError::MissingField("game_id"))?;
        let user_id = form.user_id.ok_or(ValidationError::MissingField("user_id"))?;

        Ok(Self {
            score: parse_i32_field("score", score)?,
            comment,
            game_id: parse_i32_field("game_id", game_id)?,
            user_id: parse_i32_field("user_id", user_id)?,
        })
    }
}

/// Parameters for a partial review update.
///
/// `None` leaves the column untouched. `id` and the timestamps are not updatable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReviewParams {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub game_id: Option<i32>,
    pub user_id: Option<i32>,
}

impl UpdateReviewParams {
    /// Builds update parameters from a submitted form.
    ///
    /// Only fields present in the form are validated and applied.
    pub fn from_form(form: ReviewFormDto) -> Result<Self, ValidationError> {
        Ok(Self {
            score: form
                .score
                .map(|v| parse_i32_field("score", v))
                .transpose()?,
            comment: form.comment,
            game_id: form
                .game_id
                .map(|v| parse_i32_field("game_id", v))
                .transpose()?,
            user_id: form
                .user_id
                .map(|v| parse_i32_field("user_id", v))
                .transpose()?,
        })
    }

    /// Returns true when the update would not change any column.
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.comment.is_none()
            && self.game_id.is_none()
            && self.user_id.is_none()
    }
}
