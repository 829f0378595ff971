use super::*;

/// Tests clearing the venue table.
///
/// Expected: Ok with the removed count and an empty table afterwards
#[tokio::test]
async fn removes_every_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_venue(db).await?;
    factory::create_venue(db).await?;

    let repo = VenueRepository::new(db);
    let removed = repo.delete_all().await?;

    assert_eq!(removed, 2);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests clearing an already-empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_noop_on_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let removed = repo.delete_all().await?;

    assert_eq!(removed, 0);

    Ok(())
}
