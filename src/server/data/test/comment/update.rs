use super::*;

/// Tests a partial update of the comment text only.
///
/// Expected: text changed, rating and timestamp untouched
#[tokio::test]
async fn updates_text_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update(comment.id, Some("rewritten".to_string()), None)
        .await?
        .unwrap();

    assert_eq!(updated.body, "rewritten");
    assert_eq!(updated.rating, comment.rating);
    assert_eq!(updated.created_at, comment.created_at);

    Ok(())
}

/// Tests a partial update of the rating only.
///
/// Expected: rating changed, text untouched
#[tokio::test]
async fn updates_rating_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.update(comment.id, None, Some(1)).await?.unwrap();

    assert_eq!(updated.rating, 1);
    assert_eq!(updated.body, comment.body);

    Ok(())
}

/// Tests updating an unknown comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let updated = repo.update(424242, Some("ghost".to_string()), None).await?;

    assert!(updated.is_none());

    Ok(())
}
