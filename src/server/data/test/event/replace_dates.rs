use super::*;

/// Tests that replacement discards the old entries.
///
/// Expected: only the new entries remain
#[tokio::test]
async fn replaces_entries_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, _) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    repo.replace_dates(
        event.id,
        vec![
            EventDate {
                date: "2026-10-01".to_string(),
                time: "19:30".to_string(),
            },
            EventDate {
                date: "2026-10-02".to_string(),
                time: "19:30".to_string(),
            },
        ],
    )
    .await?;

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.dates.len(), 2);
    assert!(stored.dates.iter().all(|d| d.date.starts_with("2026-10")));

    Ok(())
}

/// Tests that replacing with an empty list clears the entries.
///
/// Expected: no date entries remain
#[tokio::test]
async fn empty_replacement_clears_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, _) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    repo.replace_dates(event.id, Vec::new()).await?;

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert!(stored.dates.is_empty());

    Ok(())
}
