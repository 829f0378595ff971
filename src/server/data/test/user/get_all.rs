use super::*;

/// Tests that all users are returned in alphabetical order.
///
/// Expected: Ok with users sorted by username
#[tokio::test]
async fn returns_users_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_name(db, "charlie").await?;
    factory::user::create_user_with_name(db, "alice").await?;
    factory::user::create_user_with_name(db, "bob").await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "charlie"]);

    Ok(())
}

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
