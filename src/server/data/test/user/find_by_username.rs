use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn finds_existing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_name(db, "alice").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("alice").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests that an unknown username returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the lookup is exact, not a prefix match.
///
/// Expected: Ok(None) for a prefix of a stored username
#[tokio::test]
async fn does_not_prefix_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_name(db, "alice").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("ali").await?;

    assert!(found.is_none());

    Ok(())
}
