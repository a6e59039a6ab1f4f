use thiserror::Error;

/// Field-level problems with a submitted review form.
///
/// Every variant results in a 422 Unprocessable Entity response whose message is the
/// variant's display text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field required for creation was not submitted.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// A numeric field could not be parsed as an integer.
    #[error("Field '{field}' must be an integer, got '{value}'")]
    InvalidInteger {
        /// Name of the form field
        field: &'static str,
        /// The submitted value
        value: String,
    },

    /// `game_id` does not reference an existing game.
    #[error("Game {0} does not exist")]
    UnknownGame(i32),

    /// `user_id` does not reference an existing user.
    #[error("User {0} does not exist")]
    UnknownUser(i32),
}
