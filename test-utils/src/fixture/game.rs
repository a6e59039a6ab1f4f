//! Game fixtures for creating in-memory test data.

use entity::game;

pub const DEFAULT_TITLE: &str = "Test Game";
pub const DEFAULT_GENRE: &str = "Puzzle";
pub const DEFAULT_PLATFORM: &str = "PC";
pub const DEFAULT_PRICE: f64 = 24.99;

/// Creates a game entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Game"`
/// - genre: `"Puzzle"`
/// - platform: `"PC"`
/// - price: `24.99`
pub fn entity() -> game::Model {
    game::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        genre: DEFAULT_GENRE.to_string(),
        platform: DEFAULT_PLATFORM.to_string(),
        price: DEFAULT_PRICE,
        created_at: super::timestamp(),
        updated_at: super::timestamp(),
    }
}
