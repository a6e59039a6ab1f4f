//! Review factory for creating test review entities.
//!
//! Reviews reference a game and a user, so both must exist before `build()` is called.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, game.id, user.id)
///     .score(3)
///     .comment("Too short")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    score: i32,
    comment: String,
    game_id: i32,
    user_id: i32,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - score: `8`
    /// - comment: `"Review {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - ID of an existing game
    /// - `user_id` - ID of an existing user
    ///
    /// # Returns
    /// - `ReviewFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, game_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            score: 8,
            comment: format!("Review {}", id),
            game_id,
            user_id,
        }
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            score: ActiveValue::Set(self.score),
            comment: ActiveValue::Set(self.comment),
            game_id: ActiveValue::Set(self.game_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given game and user.
///
/// Shorthand for `ReviewFactory::new(db, game_id, user_id).build().await`.
pub async fn create_review(
    db: &DatabaseConnection,
    game_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, game_id, user_id).build().await
}
