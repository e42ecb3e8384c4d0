use super::*;

/// Tests listing categories from an empty forum table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_forums() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let categories = CategoryRepository::new(db).get_top_level().await?;

    assert!(categories.is_empty());

    Ok(())
}

/// Tests that only top-level forums are returned, in display order.
///
/// Creates forums out of order plus a sub-forum and verifies the sub-forum is
/// excluded and the rest are sorted by `forum_order`.
///
/// Expected: Ok(Vec) with two forums ordered by forum_order
#[tokio::test]
async fn returns_top_level_forums_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = ForumFactory::new(db).title("Support").order(2).build().await?;
    let first = ForumFactory::new(db).title("News").order(1).build().await?;
    ForumFactory::new(db)
        .title("Sub-forum")
        .parent(first.id)
        .build()
        .await?;

    let categories = CategoryRepository::new(db).get_top_level().await?;

    let ids: Vec<i32> = categories.iter().map(|c| c.forum.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that topic and post counts are aggregated per forum.
///
/// Expected: Ok(Vec) with counts for the busy forum and zeros for the empty one
#[tokio::test]
async fn counts_topics_and_posts_per_forum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let busy = ForumFactory::new(db).order(1).build().await?;
    let quiet = ForumFactory::new(db).order(2).build().await?;
    TopicFactory::new(db, busy.id, user.id).posts(3).build().await?;
    TopicFactory::new(db, busy.id, user.id).posts(2).build().await?;

    let categories = CategoryRepository::new(db).get_top_level().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].forum.id, busy.id);
    assert_eq!(categories[0].topics_count, 2);
    assert_eq!(categories[0].posts_count, 5);
    assert_eq!(categories[1].forum.id, quiet.id);
    assert_eq!(categories[1].topics_count, 0);
    assert_eq!(categories[1].posts_count, 0);
    assert!(categories[1].latest_topic.is_none());

    Ok(())
}

/// Tests that the latest topic is picked by last reply, falling back to creation time.
///
/// An old topic with a recent reply beats a newer unanswered topic.
///
/// Expected: Ok(Vec) whose latest_topic is the replied topic
#[tokio::test]
async fn picks_topic_with_latest_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let forum = ForumFactory::new(db).build().await?;
    let replied = TopicFactory::new(db, forum.id, user.id)
        .created(100)
        .last_reply(user.id, 900)
        .build()
        .await?;
    TopicFactory::new(db, forum.id, user.id)
        .created(500)
        .build()
        .await?;

    let categories = CategoryRepository::new(db).get_top_level().await?;

    let latest = categories[0].latest_topic.as_ref().unwrap();
    assert_eq!(latest.id, replied.id);

    Ok(())
}
