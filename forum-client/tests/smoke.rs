use std::time::Duration;

use forum_client::{ForumClient, ForumClientError};

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("FORUM_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut client = ForumClient::new(base_url);

    let registered = client
        .register("smoke_user")
        .await
        .expect("register must succeed");
    assert_eq!(registered.user_id.len(), 10);
    assert!(registered.user_id.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(registered.username, "smoke_user");

    let before = client
        .fetch_user(&registered.user_id)
        .await
        .expect("fetch_user must succeed");
    assert_eq!(before.created_at, before.last_login);

    // last_login must advance strictly; give the clock room to move.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let relogged = client
        .login(&registered.user_id, "smoke_renamed")
        .await
        .expect("login must succeed");
    assert_eq!(relogged.user_id, registered.user_id);
    assert_eq!(relogged.username, "smoke_renamed");

    let after = client
        .fetch_user(&registered.user_id)
        .await
        .expect("fetch_user must succeed");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.last_login > before.last_login);

    let first = client
        .create_post("smoke title one", "smoke content one")
        .await
        .expect("create_post must succeed");
    assert_eq!(first.title, "smoke title one");
    assert!(first.replies.is_empty());

    let second = client
        .create_post("smoke title two", "smoke content two")
        .await
        .expect("create_post must succeed");

    let reply = client
        .add_reply(&first.id, "smoke reply")
        .await
        .expect("add_reply must succeed");
    assert_eq!(reply.content, "smoke reply");
    assert_eq!(reply.author_id, registered.user_id);

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.len() <= 50);

    let pos_first = listed
        .iter()
        .position(|post| post.id == first.id)
        .expect("first post must be listed");
    let pos_second = listed
        .iter()
        .position(|post| post.id == second.id)
        .expect("second post must be listed");
    assert!(pos_second < pos_first, "newer post must come first");

    let first_listed = &listed[pos_first];
    assert_eq!(first_listed.replies.len(), 1);
    assert_eq!(first_listed.replies[0].id, reply.id);

    let missing = client.add_reply("999999999", "into the void").await;
    assert!(matches!(missing, Err(ForumClientError::NotFound)));
}
