use super::*;

/// Tests finding an existing venue by database id.
///
/// Expected: Ok(Some) with the stored venue
#[tokio::test]
async fn finds_existing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_venue(db).await?;

    let repo = VenueRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().venue_id, created.venue_id);

    Ok(())
}

/// Tests that an unknown id returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let found = repo.find_by_id(424242).await?;

    assert!(found.is_none());

    Ok(())
}
