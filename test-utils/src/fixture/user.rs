//! User fixtures for creating in-memory test data.

use entity::user;

pub const DEFAULT_NAME: &str = "Test User";

/// Creates a user entity model with id `1` and name `"Test User"`.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        created_at: super::timestamp(),
        updated_at: super::timestamp(),
    }
}
