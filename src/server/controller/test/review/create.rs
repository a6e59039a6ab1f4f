use super::*;

/// Tests creating a review from a complete form.
///
/// Verifies that the response carries the store-assigned ID and that the same record
/// is then readable at `/reviews/{id}`.
///
/// Expected: 201 with the stored review
#[tokio::test]
async fn creates_review_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let (status, created) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!(
                "score=9&comment=Great+soundtrack&game_id={}&user_id={}",
                game.id, user.id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert_eq!(created["score"], 9);
    assert_eq!(created["comment"], "Great soundtrack");
    assert_eq!(created["game_id"], game.id);
    assert_eq!(created["user_id"], user.id);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(db, get(&format!("/reviews/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["comment"], "Great soundtrack");

    Ok(())
}

/// Tests a client-supplied `id` never reaches the store.
///
/// Expected: 201 with an ID assigned by the store
#[tokio::test]
async fn ignores_client_supplied_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let (status, created) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!(
                "id=999&score=5&comment=ok&game_id={}&user_id={}",
                game.id, user.id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], 999);

    let (status, _) = send(db, get("/reviews/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests whitespace around integer fields is trimmed.
///
/// Expected: 201 with the parsed score
#[tokio::test]
async fn trims_integer_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let (status, created) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!(
                "score=+7+&comment=fine&game_id={}&user_id={}",
                game.id, user.id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["score"], 7);

    Ok(())
}

/// Expected: 422 validation_error naming the missing field, nothing stored
#[tokio::test]
async fn rejects_missing_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!("score=7&comment=fine&game_id={}", game.id),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, "validation_error", "Missing required field 'user_id'");

    let (_, reviews) = send(db, get("/reviews")).await;
    assert_eq!(reviews, serde_json::json!([]));

    Ok(())
}

/// Expected: 422 validation_error
#[tokio::test]
async fn rejects_non_integer_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!(
                "score=great&comment=fine&game_id={}&user_id={}",
                game.id, user.id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(
        &body,
        "validation_error",
        "Field 'score' must be an integer, got 'great'",
    );

    Ok(())
}

/// Tests a review pointing at a game that does not exist.
///
/// Expected: 422 validation_error, nothing stored
#[tokio::test]
async fn rejects_unknown_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::POST,
            "/reviews",
            &format!("score=7&comment=fine&game_id=404&user_id={}", user.id),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, "validation_error", "Game 404 does not exist");

    let (_, reviews) = send(db, get("/reviews")).await;
    assert_eq!(reviews, serde_json::json!([]));

    Ok(())
}

/// Tests a body sent without the form content type.
///
/// Expected: 400 bad_request
#[tokio::test]
async fn rejects_non_form_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/reviews")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"score":7}"#))
        .unwrap();

    let (status, body) = send(db, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    Ok(())
}
