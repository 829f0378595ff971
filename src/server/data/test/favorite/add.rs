use super::*;

/// Tests adding a fresh favorite.
///
/// Expected: pair exists after the add
#[tokio::test]
async fn adds_new_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, venue.id).await?;

    assert!(repo.exists(user.id, venue.id).await?);

    Ok(())
}

/// Tests that adding the same pair twice stores a single row.
///
/// Expected: one favorited venue after both adds
#[tokio::test]
async fn duplicate_add_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, venue.id).await?;
    repo.add(user.id, venue.id).await?;

    let venues = repo.venues_for_user(user.id).await?;
    assert_eq!(venues.len(), 1);

    Ok(())
}

/// Tests that the same venue can be favorited by different users.
///
/// Expected: one pair per user
#[tokio::test]
async fn different_users_favorite_same_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(alice.id, venue.id).await?;
    repo.add(bob.id, venue.id).await?;

    assert!(repo.exists(alice.id, venue.id).await?);
    assert!(repo.exists(bob.id, venue.id).await?);

    Ok(())
}
