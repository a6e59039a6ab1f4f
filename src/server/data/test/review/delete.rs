use super::*;

/// Tests deleting an existing review.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let deleted = repo.delete(review.id).await?;

    assert!(deleted);
    let stored = entity::prelude::Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that deleting twice reports the second call as a miss.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);

    Ok(())
}

/// Tests that deleting one review leaves others in place.
///
/// Expected: Ok(true) and the other review still exists
#[tokio::test]
async fn leaves_other_reviews_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user, first) = factory::helpers::create_review_with_dependencies(db).await?;
    let second = factory::create_review(db, game.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.find_by_id(second.id).await?.is_some());

    Ok(())
}
