use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests that all comments on a venue are returned, newest first.
///
/// Expected: ordering by creation time descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let base = chrono::Utc::now();
    let older = CommentFactory::new(db, &user, venue.id)
        .body("older")
        .created_at(base - chrono::Duration::hours(2))
        .build()
        .await?;
    let newer = CommentFactory::new(db, &user, venue.id)
        .body("newer")
        .created_at(base)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_venue(venue.id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, newer.id);
    assert_eq!(comments[1].id, older.id);

    Ok(())
}

/// Tests that comments on other venues are excluded.
///
/// Expected: only the target venue's comments
#[tokio::test]
async fn excludes_other_venues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let target = factory::create_venue(db).await?;
    let other = factory::create_venue(db).await?;
    factory::create_comment(db, &user, target.id).await?;
    factory::create_comment(db, &user, other.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_venue(target.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].venue_id, target.id);

    Ok(())
}
