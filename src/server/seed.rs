//! Fixture data for a fresh database.
//!
//! Games and users cannot be created through the API, so a new deployment starts with
//! this set when `SEED_DATABASE` is enabled.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::data::game::GameRepository;

/// (title, genre, platform, price)
const GAMES: &[(&str, &str, &str, f64)] = &[
    ("Stardew Valley", "Simulation", "PC", 14.99),
    ("Hollow Knight", "Metroidvania", "Switch", 14.99),
    ("Celeste", "Platformer", "PC", 19.99),
    ("Hades", "Roguelike", "PS5", 24.99),
    ("Disco Elysium", "RPG", "PC", 39.99),
];

const USERS: &[&str] = &["liam", "olivia", "noah", "emma"];

/// (score, comment, index into GAMES, index into USERS)
const REVIEWS: &[(i32, &str, usize, usize)] = &[
    (10, "Could farm forever.", 0, 0),
    (9, "Brutal but fair.", 1, 1),
    (8, "The soundtrack carries it.", 2, 2),
    (10, "Every run feels different.", 3, 3),
    (7, "Dense, but worth the read.", 4, 0),
    (6, "Too many parsnips.", 0, 2),
];

/// Inserts the fixture games, users and reviews in one transaction.
///
/// Does nothing if any game already exists.
///
/// # Returns
/// - `Ok(true)` - Fixture data was inserted
/// - `Ok(false)` - The store already had games
/// - `Err(DbErr)` - Insert failed; nothing was committed
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, DbErr> {
    if GameRepository::new(db).count().await? > 0 {
        return Ok(false);
    }

    let now = Utc::now();
    let txn = db.begin().await?;

    let mut game_ids = Vec::with_capacity(GAMES.len());
    for (title, genre, platform, price) in GAMES {
        let game = entity::game::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            genre: ActiveValue::Set(genre.to_string()),
            platform: ActiveValue::Set(platform.to_string()),
            price: ActiveValue::Set(*price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        game_ids.push(game.id);
    }

    let mut user_ids = Vec::with_capacity(USERS.len());
    for name in USERS {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        user_ids.push(user.id);
    }

    for (score, comment, game, user) in REVIEWS {
        entity::review::ActiveModel {
            score: ActiveValue::Set(*score),
            comment: ActiveValue::Set(comment.to_string()),
            game_id: ActiveValue::Set(game_ids[*game]),
            user_id: ActiveValue::Set(user_ids[*user]),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(true)
}
