use super::*;

/// Tests creating an event with a date entry.
///
/// Expected: Ok with the stored fields and the date attached
#[tokio::test]
async fn creates_event_with_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(create_params(1, venue.id)).await?;

    assert_eq!(event.event_id, 1);
    assert_eq!(event.title, "Evening Concert");
    assert_eq!(event.dates.len(), 1);
    assert_eq!(event.dates[0].date, "2026-09-01");
    assert_eq!(event.dates[0].time, "20:00");

    Ok(())
}

/// Tests that the unique business key constraint rejects a duplicate.
///
/// Expected: Err(DbErr) on the second insert with the same key
#[tokio::test]
async fn rejects_duplicate_business_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = EventRepository::new(db);
    repo.create(create_params(1, venue.id)).await?;

    let result = repo.create(create_params(1, venue.id)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests creating an event without any date entries.
///
/// Expected: Ok with an empty date list
#[tokio::test]
async fn creates_event_without_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let repo = EventRepository::new(db);
    let mut params = create_params(1, venue.id);
    params.dates.clear();
    let event = repo.create(params).await?;

    assert!(event.dates.is_empty());

    Ok(())
}
