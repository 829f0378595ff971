use super::*;

/// Tests that the join attaches the venue's name and address.
///
/// Expected: venue info present on each returned entry
#[tokio::test]
async fn attaches_venue_info() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let venue = factory::venue::VenueFactory::new(db)
        .venue_name("City Hall")
        .address("5 Edinburgh Place")
        .build()
        .await?;
    factory::create_comment(db, &user, venue.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_user_with_venue(user.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].venue_name, "City Hall");
    assert_eq!(comments[0].address, "5 Edinburgh Place");

    Ok(())
}

/// Tests that comments across several venues each carry their own venue info.
///
/// Expected: every entry joined to the right venue
#[tokio::test]
async fn joins_each_comment_to_its_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::venue::VenueFactory::new(db)
        .venue_name("First Venue")
        .build()
        .await?;
    let second = factory::venue::VenueFactory::new(db)
        .venue_name("Second Venue")
        .build()
        .await?;
    factory::create_comment(db, &user, first.id).await?;
    factory::create_comment(db, &user, second.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_user_with_venue(user.id).await?;

    assert_eq!(comments.len(), 2);
    for entry in &comments {
        let expected = if entry.comment.venue_id == first.id {
            "First Venue"
        } else {
            "Second Venue"
        };
        assert_eq!(entry.venue_name, expected);
    }

    Ok(())
}
