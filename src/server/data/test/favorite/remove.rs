use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok(true) and the pair gone afterwards
#[tokio::test]
async fn removes_existing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;
    factory::create_favorite(db, user.id, venue.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove(user.id, venue.id).await?;

    assert!(removed);
    assert!(!repo.exists(user.id, venue.id).await?);

    Ok(())
}

/// Tests removing a pair that was never added.
///
/// Expected: Ok(false) and no side effects
#[tokio::test]
async fn remove_of_absent_pair_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove(user.id, venue.id).await?;

    assert!(!removed);

    Ok(())
}

/// Tests that removing one user's favorite leaves another user's intact.
///
/// Expected: only the named user's pair removed
#[tokio::test]
async fn remove_is_scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let venue = factory::create_venue(db).await?;
    factory::create_favorite(db, alice.id, venue.id).await?;
    factory::create_favorite(db, bob.id, venue.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.remove(alice.id, venue.id).await?;

    assert!(!repo.exists(alice.id, venue.id).await?);
    assert!(repo.exists(bob.id, venue.id).await?);

    Ok(())
}
