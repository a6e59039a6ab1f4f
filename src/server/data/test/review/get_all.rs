use super::*;

/// Tests listing reviews from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_vec_when_no_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all().await?;

    assert!(reviews.is_empty());

    Ok(())
}

/// Tests listing reviews across several games and users.
///
/// Expected: Ok with every review ordered by ID
#[tokio::test]
async fn returns_all_reviews_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user, first) = factory::helpers::create_review_with_dependencies(db).await?;
    let other_game = factory::create_game(db).await?;
    let second = factory::create_review(db, other_game.id, user.id).await?;
    let third = factory::create_review(db, game.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all().await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(reviews[1].game_id, other_game.id);

    Ok(())
}
