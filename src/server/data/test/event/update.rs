use super::*;

/// Tests a partial update touching the title only.
///
/// Expected: title changed, other fields untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let event = factory::event::EventFactory::new(db, venue.id)
        .title("Original Title")
        .presenter("Original Presenter")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                title: Some("New Title".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.presenter.as_deref(), Some("Original Presenter"));
    assert_eq!(updated.event_id, event.event_id);

    Ok(())
}

/// Tests re-homing an event to another venue.
///
/// Expected: the join returns the new venue
#[tokio::test]
async fn rehomes_event_to_new_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::create_venue(db).await?;
    let new = factory::create_venue(db).await?;
    let event = factory::create_event(db, old.id).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                venue_id: Some(new.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.venue.unwrap().id, new.id);

    Ok(())
}

/// Tests updating an unknown event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let updated = repo.update(424242, UpdateEventParams::default()).await?;

    assert!(updated.is_none());

    Ok(())
}
