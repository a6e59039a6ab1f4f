use crate::server::{config::Config, error::AppError, seed};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds fixture data when enabled in configuration.
///
/// # Arguments
/// - `db` - Connected database with migrations applied
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` - Seeding skipped or completed
/// - `Err(AppError::DbErr)` - Failed to insert fixture data
pub async fn seed_if_enabled(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    if !config.seed_database {
        return Ok(());
    }

    if seed::seed_database(db).await? {
        tracing::info!("Seeded database with fixture games, users and reviews");
    } else {
        tracing::info!("Database already contains games, skipping seed");
    }

    Ok(())
}
