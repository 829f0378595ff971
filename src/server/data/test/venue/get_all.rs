use super::*;

/// Tests that all venues are returned ordered by name.
///
/// Expected: Ok with venues sorted alphabetically by venue name
#[tokio::test]
async fn returns_venues_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::venue::VenueFactory::new(db)
        .venue_name("Theatre")
        .build()
        .await?;
    factory::venue::VenueFactory::new(db)
        .venue_name("Arts Centre")
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let venues = repo.get_all().await?;

    let names: Vec<&str> = venues.iter().map(|v| v.venue_name.as_str()).collect();
    assert_eq!(names, vec!["Arts Centre", "Theatre"]);

    Ok(())
}

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_venues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let venues = repo.get_all().await?;

    assert!(venues.is_empty());

    Ok(())
}
