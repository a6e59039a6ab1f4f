use super::*;

/// Tests patching only the comment.
///
/// Expected: 200 with the new comment and every other field unchanged
#[tokio::test]
async fn updates_comment_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let (status, body) = send(
        db,
        form(Method::PATCH, &format!("/reviews/{}", review.id), "comment=x"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], review.id);
    assert_eq!(body["comment"], "x");
    assert_eq!(body["score"], review.score);
    assert_eq!(body["game_id"], game.id);
    assert_eq!(body["user_id"], user.id);

    let (_, fetched) = send(db, get(&format!("/reviews/{}", review.id))).await;
    assert_eq!(fetched["comment"], "x");

    Ok(())
}

/// Tests keys outside the allow-list are dropped silently.
///
/// Expected: 200 with only the allow-listed field applied and the ID unchanged
#[tokio::test]
async fn ignores_unknown_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::PATCH,
            &format!("/reviews/{}", review.id),
            "id=500&rating=1&created_at=never&score=2",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], review.id);
    assert_eq!(body["score"], 2);
    assert!(body.get("rating").is_none());

    let (status, _) = send(db, get("/reviews/500")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests an empty body leaves the record untouched.
///
/// Expected: 200 with the current record, `updated_at` not refreshed
#[tokio::test]
async fn empty_body_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let uri = format!("/reviews/{}", review.id);

    let (_, before) = send(db, get(&uri)).await;
    let (status, body) = send(db, form(Method::PATCH, &uri, "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, before);

    Ok(())
}

/// Tests moving a review to another game.
///
/// Expected: 200 with the new game ID
#[tokio::test]
async fn updates_game_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let other = factory::create_game(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::PATCH,
            &format!("/reviews/{}", review.id),
            &format!("game_id={}", other.id),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["game_id"], other.id);

    Ok(())
}

/// Expected: 422 validation_error, record unchanged
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let (status, body) = send(
        db,
        form(
            Method::PATCH,
            &format!("/reviews/{}", review.id),
            "user_id=999&comment=moved",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, "validation_error", "User 999 does not exist");

    let (_, fetched) = send(db, get(&format!("/reviews/{}", review.id))).await;
    assert_eq!(fetched["user_id"], user.id);
    assert_eq!(fetched["comment"], review.comment.as_str());

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

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let (status, body) = send(
        db,
        form(Method::PATCH, &format!("/reviews/{}", review.id), "score=9.5"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    Ok(())
}

/// Tests a missing review is reported before the body is inspected.
///
/// Expected: 404 not_found even though the body is invalid
#[tokio::test]
async fn returns_404_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, form(Method::PATCH, "/reviews/7", "score=abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "Review not found");

    Ok(())
}

/// Tests a PATCH that carries no body and no content type.
///
/// Expected: 200 with the current record unchanged
#[tokio::test]
async fn bodiless_request_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let uri = format!("/reviews/{}", review.id);

    let (_, before) = send(db, get(&uri)).await;

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(db, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, before);

    Ok(())
}

/// Tests a non-empty body that is not form-encoded.
///
/// Expected: 400 bad_request, record unchanged
#[tokio::test]
async fn rejects_non_form_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let uri = format!("/reviews/{}", review.id);

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(&uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"score":1}"#))
        .unwrap();
    let (status, body) = send(db, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (_, fetched) = send(db, get(&uri)).await;
    assert_eq!(fetched["score"], review.score);

    Ok(())
}

/// Tests a form that repeats an allow-listed key.
///
/// Expected: 400 bad_request, record unchanged
#[tokio::test]
async fn rejects_repeated_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let uri = format!("/reviews/{}", review.id);

    let (status, body) = send(db, form(Method::PATCH, &uri, "score=1&score=2")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (_, fetched) = send(db, get(&uri)).await;
    assert_eq!(fetched["score"], review.score);

    Ok(())
}

/// Tests an ID beyond the stored ID range.
///
/// Expected: 404 not_found
#[tokio::test]
async fn returns_404_for_out_of_range_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, form(Method::PATCH, "/reviews/3000000000", "comment=x")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "Review not found");

    Ok(())
}
