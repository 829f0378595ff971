use super::*;

/// Tests that only the author's comments are returned.
///
/// Expected: one comment for each of two users commenting the same venue
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;
    factory::create_comment(db, &alice, venue.id).await?;
    factory::create_comment(db, &bob, venue.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_user(alice.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user_id, alice.id);

    Ok(())
}

/// Tests that a user without comments gets an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_user(user.id).await?;

    assert!(comments.is_empty());

    Ok(())
}
