use super::*;

/// Tests that the first key on an empty table is 1.
///
/// Expected: Ok(1)
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    assert_eq!(repo.next_event_id().await?, 1);

    Ok(())
}

/// Tests that the next key follows the highest assigned one.
///
/// Expected: max + 1 even with gaps in the sequence
#[tokio::test]
async fn follows_highest_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    factory::event::create_event_with_id(db, venue.id, 3).await?;
    factory::event::create_event_with_id(db, venue.id, 17).await?;

    let repo = EventRepository::new(db);
    assert_eq!(repo.next_event_id().await?, 18);

    Ok(())
}
