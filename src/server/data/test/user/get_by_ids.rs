use super::*;

/// Tests looking up a mix of known, repeated and unknown IDs.
///
/// Expected: Ok(HashMap) containing only the existing users
#[tokio::test]
async fn returns_existing_users_keyed_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let users = UserRepository::new(db)
        .get_by_ids(vec![first.id, second.id, first.id, 9_999])
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].username, first.username);
    assert_eq!(users[&second.id].username, second.username);

    Ok(())
}

/// Tests an empty ID list.
///
/// Expected: Ok(empty HashMap) without querying
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_by_ids(Vec::new()).await?;

    assert!(users.is_empty());

    Ok(())
}
