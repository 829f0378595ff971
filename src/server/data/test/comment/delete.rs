use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(true) and the comment gone afterwards
#[tokio::test]
async fn deletes_existing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(comment.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown comment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(424242).await?;

    assert!(!deleted);

    Ok(())
}
