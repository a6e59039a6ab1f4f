//! Review fixtures for creating in-memory test data.

use entity::review;

pub const DEFAULT_SCORE: i32 = 7;
pub const DEFAULT_COMMENT: &str = "Solid, if a little short.";

/// Creates a review entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - score: `7`
/// - comment: `"Solid, if a little short."`
/// - game_id: `1`
/// - user_id: `1`
pub fn entity() -> review::Model {
    review::Model {
        id: 1,
        score: DEFAULT_SCORE,
        comment: DEFAULT_COMMENT.to_string(),
        game_id: 1,
        user_id: 1,
        created_at: super::timestamp(),
        updated_at: super::timestamp(),
    }
}
