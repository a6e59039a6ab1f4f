use super::*;

/// Tests counting games.
///
/// Expected: 0 on an empty table, then the number of inserted rows
#[tokio::test]
async fn counts_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_game(db).await?;
    factory::create_game(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
