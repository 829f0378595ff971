use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user gone afterwards
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(424242).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting a user cascades to their comments and favorites.
///
/// Expected: dependent rows gone after the delete
#[tokio::test]
async fn cascades_to_comments_and_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, venue, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    factory::create_favorite(db, user.id, venue.id).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    use sea_orm::EntityTrait;
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Favorite::find().one(db).await?.is_none());

    Ok(())
}
