use super::*;

/// Tests the rating projection over a venue's comments.
///
/// Expected: every stored rating present in the result
#[tokio::test]
async fn projects_all_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;
    for rating in [5, 3, 4] {
        factory::comment::create_comment_with_rating(db, &user, venue.id, rating).await?;
    }

    let repo = CommentRepository::new(db);
    let mut ratings = repo.ratings_for_venue(venue.id).await?;
    ratings.sort_unstable();

    assert_eq!(ratings, vec![3, 4, 5]);

    Ok(())
}

/// Tests that a venue without comments projects an empty set.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_uncommented_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = CommentRepository::new(db);
    let ratings = repo.ratings_for_venue(venue.id).await?;

    assert!(ratings.is_empty());

    Ok(())
}

/// Tests that the projection is scoped to the requested venue.
///
/// Expected: other venues' ratings excluded
#[tokio::test]
async fn scopes_to_requested_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let target = factory::create_venue(db).await?;
    let other = factory::create_venue(db).await?;
    factory::comment::create_comment_with_rating(db, &user, target.id, 5).await?;
    factory::comment::create_comment_with_rating(db, &user, other.id, 1).await?;

    let repo = CommentRepository::new(db);
    let ratings = repo.ratings_for_venue(target.id).await?;

    assert_eq!(ratings, vec![5]);

    Ok(())
}
