//! Review service for business logic.
//!
//! This module provides the `ReviewService`, which checks that reviews reference an
//! existing game and user before writing and turns empty partial updates into plain
//! reads.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, review::ReviewRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    model::review::{CreateReviewParams, Review, UpdateReviewParams},
};

/// Service providing business logic for review management.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new ReviewService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReviewService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every review ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Retrieves a review by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Review found
    /// - `Ok(None)` - No review with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates a review after checking that its game and user exist.
    ///
    /// # Arguments
    /// - `params` - Parsed creation parameters
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review including its assigned ID
    /// - `Err(AppError::Validation)` - `game_id` or `user_id` references nothing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        self.ensure_game_exists(params.game_id).await?;
        self.ensure_user_exists(params.user_id).await?;

        let repo = ReviewRepository::new(self.db);
        let review = repo.create(params).await?;

        tracing::info!(
            "Created review {} for game {} by user {}",
            review.id,
            review.game_id,
            review.user_id
        );

        Ok(review)
    }

    /// Applies a partial update to a review already loaded by the caller.
    ///
    /// Foreign keys present in `params` are checked before writing. An update without
    /// any field returns `existing` unchanged without touching `updated_at`.
    ///
    /// # Arguments
    /// - `existing` - The review as currently stored
    /// - `params` - Columns to change
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated (or unchanged) review
    /// - `Ok(None)` - The review was deleted in the meantime
    /// - `Err(AppError::Validation)` - A new `game_id`/`user_id` references nothing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        existing: Review,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, AppError> {
        if params.is_empty() {
            return Ok(Some(existing));
        }

        if let Some(game_id) = params.game_id {
            self.ensure_game_exists(game_id).await?;
        }
        if let Some(user_id) = params.user_id {
            self.ensure_user_exists(user_id).await?;
        }

        let repo = ReviewRepository::new(self.db);
        let review = repo.update(existing.id, params).await?;

        if review.is_some() {
            tracing::info!("Updated review {}", existing.id);
        }

        Ok(review)
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - The review was deleted
    /// - `Ok(false)` - No review with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ReviewRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::info!("Deleted review {}", id);
        }

        Ok(deleted)
    }

    async fn ensure_game_exists(&self, game_id: i32) -> Result<(), AppError> {
        if !GameRepository::new(self.db).exists(game_id).await? {
            return Err(ValidationError::UnknownGame(game_id).into());
        }
        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(ValidationError::UnknownUser(user_id).into());
        }
        Ok(())
    }
}
