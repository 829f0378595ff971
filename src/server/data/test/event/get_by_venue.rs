use super::*;

/// Tests that events are filtered by venue.
///
/// Expected: only the named venue's events
#[tokio::test]
async fn filters_by_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_venue(db).await?;
    let other = factory::create_venue(db).await?;
    let wanted = factory::create_event(db, target.id).await?;
    factory::create_event(db, other.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_by_venue(target.id).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, wanted.id);

    Ok(())
}

/// Tests that a venue without events yields an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_for_quiet_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_by_venue(venue.id).await?;

    assert!(events.is_empty());

    Ok(())
}
