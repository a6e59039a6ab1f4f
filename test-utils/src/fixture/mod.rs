//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! conversions and serialization without persistence.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let review = fixture::review::entity();
//! assert_eq!(review.score, fixture::review::DEFAULT_SCORE);
//! ```

pub mod game;
pub mod review;
pub mod user;

use chrono::{DateTime, Utc};

/// Fixed timestamp used for `created_at`/`updated_at` on every fixture (2025-01-01T00:00:00Z).
pub fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default()
}
