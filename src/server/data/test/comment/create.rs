use super::*;

/// Tests inserting a comment row.
///
/// Expected: Ok with the stored fields and a creation timestamp
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(InsertCommentParams {
            user_id: user.id,
            venue_id: venue.id,
            username: user.username.clone(),
            body: "Great acoustics".to_string(),
            rating: 5,
        })
        .await?;

    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.venue_id, venue.id);
    assert_eq!(comment.username, user.username);
    assert_eq!(comment.body, "Great acoustics");
    assert_eq!(comment.rating, 5);

    Ok(())
}

/// Tests that the username snapshot is stored as given, not re-derived.
///
/// Expected: the snapshot value survives even if it differs from the account name
#[tokio::test]
async fn stores_username_snapshot_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(InsertCommentParams {
            user_id: user.id,
            venue_id: venue.id,
            username: "name at posting time".to_string(),
            body: "snapshot check".to_string(),
            rating: 3,
        })
        .await?;

    assert_eq!(comment.username, "name at posting time");

    Ok(())
}
