use super::*;

const NOW: i64 = 1_700_000_000;

/// Tests counting an empty forum.
///
/// Expected: Ok(ServerInfo) with every count zero
#[tokio::test]
async fn counts_zero_for_empty_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let info = StatsRepository::new(db).get_server_info(NOW).await?;

    assert_eq!(info, ServerInfo::default());

    Ok(())
}

/// Tests counts and the online window boundary.
///
/// Creates one user inside the window, one exactly on its edge and one outside.
///
/// Expected: Ok(ServerInfo) with 3 users, 1 online, and matching topic and post counts
#[tokio::test]
async fn counts_users_online_topics_and_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = UserFactory::new(db).last_online(NOW - 60).build().await?;
    UserFactory::new(db)
        .last_online(NOW - ONLINE_WINDOW_SECS)
        .build()
        .await?;
    UserFactory::new(db).last_online(NOW - 86_400).build().await?;

    let forum = factory::forum::create_forum(db).await?;
    let topic = factory::topic::create_topic(db, forum.id, active.id).await?;
    factory::topic::create_topic(db, forum.id, active.id).await?;
    factory::post::create_post(db, topic.id, active.id, "First").await?;
    factory::post::create_post(db, topic.id, active.id, "Second").await?;
    factory::post::create_post(db, topic.id, active.id, "Third").await?;

    let info = StatsRepository::new(db).get_server_info(NOW).await?;

    assert_eq!(
        info,
        ServerInfo {
            users: 3,
            online: 1,
            topics: 2,
            posts: 3,
        }
    );

    Ok(())
}
