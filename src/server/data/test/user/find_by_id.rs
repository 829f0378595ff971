use super::*;

/// Tests finding an existing user by database id.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().username, created.username);

    Ok(())
}

/// Tests that an unknown id returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(424242).await?;

    assert!(found.is_none());

    Ok(())
}
