use super::*;

/// Tests that all events come back ordered by business key with joins attached.
///
/// Expected: ascending business keys, each event with its venue and dates
#[tokio::test]
async fn returns_events_ordered_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let second = factory::event::create_event_with_id(db, venue.id, 2).await?;
    let first = factory::event::create_event_with_id(db, venue.id, 1).await?;
    factory::create_event_date(db, first.id).await?;
    factory::create_event_date(db, second.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_all().await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, 1);
    assert_eq!(events[1].event_id, 2);
    for event in &events {
        assert_eq!(event.venue.as_ref().unwrap().id, venue.id);
        assert_eq!(event.dates.len(), 1);
    }

    Ok(())
}

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let events = repo.get_all().await?;

    assert!(events.is_empty());

    Ok(())
}
