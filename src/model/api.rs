use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    /// Machine readable error kind, e.g. `not_found` or `validation_error`.
    pub error: String,
    /// Human readable description.
    pub message: String,
}
