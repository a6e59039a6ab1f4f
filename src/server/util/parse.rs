use crate::server::error::validation::ValidationError;

/// Parses an integer form field.
///
/// Surrounding whitespace is ignored.
///
/// # Arguments
/// - `field` - Name of the form field, used in the error message
/// - `value` - The raw submitted value
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed value
/// - `Err(ValidationError::InvalidInteger)` - The value is not an integer
pub fn parse_i32_field(field: &'static str, value: String) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidInteger { field, value })
}
