//! HTTP request handlers.
//!
//! Controllers extract path and form input, call into the service layer and convert
//! domain models into DTOs. Every handler returns `Result<_, AppError>` so failures go
//! through the single error mapping in `server::error`.

pub mod game;
pub mod index;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Unwraps an integer `{id}` path segment.
///
/// A segment that is not an integer is a 400. An integer outside the `i32` id range
/// cannot name a stored row, so it is reported with `not_found`.
pub(crate) fn path_id(
    path: Result<Path<i64>, PathRejection>,
    not_found: fn() -> AppError,
) -> Result<i32, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;

    i32::try_from(id).map_err(|_| not_found())
}
