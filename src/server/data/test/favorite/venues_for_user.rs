use super::*;

/// Tests that favorites expand to full venue records.
///
/// Expected: the favorited venue returned with its fields
#[tokio::test]
async fn expands_to_venue_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::venue::VenueFactory::new(db)
        .venue_name("City Hall")
        .build()
        .await?;
    factory::create_favorite(db, user.id, venue.id).await?;

    let repo = FavoriteRepository::new(db);
    let venues = repo.venues_for_user(user.id).await?;

    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].venue_name, "City Hall");

    Ok(())
}

/// Tests that other users' favorites are excluded.
///
/// Expected: only the named user's venues
#[tokio::test]
async fn scopes_to_requested_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let mine = factory::create_venue(db).await?;
    let theirs = factory::create_venue(db).await?;
    factory::create_favorite(db, alice.id, mine.id).await?;
    factory::create_favorite(db, bob.id, theirs.id).await?;

    let repo = FavoriteRepository::new(db);
    let venues = repo.venues_for_user(alice.id).await?;

    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].id, mine.id);

    Ok(())
}

/// Tests that a user without favorites gets an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let venues = repo.venues_for_user(user.id).await?;

    assert!(venues.is_empty());

    Ok(())
}
