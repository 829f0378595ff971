use super::*;

/// Tests a partial update touching a single field.
///
/// Expected: named field changed, everything else untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::VenueFactory::new(db)
        .venue_name("Old Name")
        .address("Old Address")
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(
            venue.id,
            UpdateVenueParams {
                venue_name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.venue_name, "New Name");
    assert_eq!(updated.address, "Old Address");
    assert_eq!(updated.venue_id, venue.venue_id);

    Ok(())
}

/// Tests that the update path never touches the rating aggregates.
///
/// Expected: seeded aggregates survive a descriptive update
#[tokio::test]
async fn preserves_rating_aggregates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::VenueFactory::new(db)
        .rating_stats(3.7, 6)
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(
            venue.id,
            UpdateVenueParams {
                description: Some("Renovated in 2026".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.average_rating, 3.7);
    assert_eq!(updated.total_comments, 6);

    Ok(())
}

/// Tests updating an unknown venue.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let updated = repo.update(424242, UpdateVenueParams::default()).await?;

    assert!(updated.is_none());

    Ok(())
}
