//! SeaORM entities for the games, users and reviews tables.

pub mod prelude;

pub mod game;
pub mod review;
pub mod user;
