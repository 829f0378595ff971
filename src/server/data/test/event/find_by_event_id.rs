use super::*;

/// Tests finding an event by its business key.
///
/// Expected: Ok(Some) with the stored event
#[tokio::test]
async fn finds_by_business_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let event = factory::event::create_event_with_id(db, venue.id, 42).await?;

    let repo = EventRepository::new(db);
    let found = repo.find_by_event_id(42).await?.unwrap();

    assert_eq!(found.id, event.id);

    Ok(())
}

/// Tests that an unknown business key returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let found = repo.find_by_event_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
