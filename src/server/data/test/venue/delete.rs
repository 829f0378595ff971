use super::*;

/// Tests deleting an existing venue.
///
/// Expected: Ok(true) and the venue gone afterwards
#[tokio::test]
async fn deletes_existing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = VenueRepository::new(db);
    let deleted = repo.delete(venue.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(venue.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown venue.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let deleted = repo.delete(424242).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting a venue cascades to comments, favorites, and events.
///
/// Expected: dependent rows gone after the delete
#[tokio::test]
async fn cascades_to_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, venue, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    factory::create_favorite(db, user.id, venue.id).await?;
    let event = factory::create_event(db, venue.id).await?;

    let repo = VenueRepository::new(db);
    repo.delete(venue.id).await?;

    use sea_orm::EntityTrait;
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Favorite::find().one(db).await?.is_none());
    assert!(entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
