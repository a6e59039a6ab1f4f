//! Review data repository for database operations.
//!
//! Provides the `ReviewRepository` for creating, reading, partially updating and
//! deleting reviews, converting entity models into domain models at the boundary.
//! Foreign key existence is checked by the service layer before calling in.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review, UpdateReviewParams};

/// Repository providing database operations for review management.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReviewRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every review ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Review>)` - All reviews, empty if the table is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Finds a review by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the review
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Review found
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Inserts a new review.
    ///
    /// The ID is assigned by the database; both timestamps are set to now.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review including its assigned ID
    /// - `Err(DbErr)` - Database error during insert (including foreign key violations)
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();

        let entity = entity::review::ActiveModel {
            score: ActiveValue::Set(params.score),
            comment: ActiveValue::Set(params.comment),
            game_id: ActiveValue::Set(params.game_id),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Applies a partial update to a review.
    ///
    /// Only the columns present in `params` are written, plus `updated_at`. The row is
    /// addressed by primary key without loading it first.
    ///
    /// # Arguments
    /// - `id` - ID of the review to update
    /// - `params` - Columns to change
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, DbErr> {
        let mut active = entity::review::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(score) = params.score {
            active.score = ActiveValue::Set(score);
        }
        if let Some(comment) = params.comment {
            active.comment = ActiveValue::Set(comment);
        }
        if let Some(game_id) = params.game_id {
            active.game_id = ActiveValue::Set(game_id);
        }
        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }

        match active.update(self.db).await {
            Ok(entity) => Ok(Some(Review::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes a review.
    ///
    /// # Arguments
    /// - `id` - ID of the review to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The review existed and was removed
    /// - `Ok(false)` - No review with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
