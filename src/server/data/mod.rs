//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from business logic. Writes address rows by primary key
//! without loading them first.

pub mod game;
pub mod review;
pub mod user;
