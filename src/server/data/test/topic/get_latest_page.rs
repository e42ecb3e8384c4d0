use super::*;

/// Tests listing topics from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topics = TopicRepository::new(db).get_latest_page(1).await?;

    assert!(topics.is_empty());

    Ok(())
}

/// Tests ordering and the joined creator and last replier.
///
/// Expected: Ok(Vec) newest first, with creator and replier users attached
#[tokio::test]
async fn returns_newest_first_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = UserFactory::new(db).username("creator").build().await?;
    let replier = UserFactory::new(db).username("replier").build().await?;
    let forum = factory::forum::create_forum(db).await?;

    let older = TopicFactory::new(db, forum.id, creator.id)
        .created(1_000)
        .last_reply(replier.id, 1_500)
        .build()
        .await?;
    let newer = TopicFactory::new(db, forum.id, creator.id)
        .created(2_000)
        .build()
        .await?;

    let topics = TopicRepository::new(db).get_latest_page(1).await?;

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].topic.id, newer.id);
    assert_eq!(topics[1].topic.id, older.id);
    assert_eq!(
        topics[0].creator.as_ref().map(|u| u.username.as_str()),
        Some("creator")
    );
    assert!(topics[0].last_replier.is_none());
    assert_eq!(
        topics[1].last_replier.as_ref().map(|u| u.username.as_str()),
        Some("replier")
    );

    Ok(())
}

/// Tests pagination with a fixed page size.
///
/// Creates one more topic than fits on a page.
///
/// Expected: first page is full, second page holds the oldest topic, third is empty
#[tokio::test]
async fn paginates_by_fixed_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let forum = factory::forum::create_forum(db).await?;

    let mut oldest = None;
    for i in 0..=TOPICS_PAGE_SIZE as i64 {
        let topic = TopicFactory::new(db, forum.id, user.id)
            .created(10_000 + i)
            .build()
            .await?;
        oldest.get_or_insert(topic.id);
    }

    let repo = TopicRepository::new(db);
    let first = repo.get_latest_page(1).await?;
    let second = repo.get_latest_page(2).await?;
    let third = repo.get_latest_page(3).await?;

    assert_eq!(first.len() as u64, TOPICS_PAGE_SIZE);
    assert_eq!(second.len(), 1);
    assert_eq!(Some(second[0].topic.id), oldest);
    assert!(third.is_empty());

    Ok(())
}

/// Tests a page whose offset overflows.
///
/// Expected: Ok(empty Vec) without panicking
#[tokio::test]
async fn overflowing_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let forum = factory::forum::create_forum(db).await?;
    TopicFactory::new(db, forum.id, user.id).build().await?;

    let topics = TopicRepository::new(db).get_latest_page(u64::MAX).await?;

    assert!(topics.is_empty());

    Ok(())
}
