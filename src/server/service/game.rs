use sea_orm::DatabaseConnection;

use crate::server::{data::game::GameRepository, error::AppError, model::game::Game};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a game by ID, `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
