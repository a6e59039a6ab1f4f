//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM active models,
//! so foreign keys must already exist before a review is created.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::game::create_game(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (game, user, review) = factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .title("Hollow Knight")
//!     .price(14.99)
//!     .build()
//!     .await?;
//!
//! let review = factory::review::ReviewFactory::new(&db, game.id, user.id)
//!     .score(9)
//!     .comment("Great atmosphere")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `game` - Create game entities
//! - `user` - Create user entities
//! - `review` - Create review entities for an existing game and user
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod game;
pub mod helpers;
pub mod review;
pub mod user;

pub use game::create_game;
pub use review::create_review;
pub use user::create_user;
