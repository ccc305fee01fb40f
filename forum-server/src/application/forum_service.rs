use chrono::Utc;
use uuid::Uuid;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, CreateReplyRequest, Post, Reply};

/// Fixed cutoff for the recent-posts snapshot; there is no cursor.
pub(crate) const RECENT_POSTS_LIMIT: i64 = 50;

pub(crate) struct ForumService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> ForumService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_recent(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_recent(RECENT_POSTS_LIMIT).await
    }

    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let req = req.validate()?;

        self.repo
            .insert_post(NewPost {
                title: req.title,
                content: req.content,
                author_id: req.author_id,
                username: req.username,
            })
            .await
    }

    pub(crate) async fn add_reply(
        &self,
        post_id: i64,
        req: CreateReplyRequest,
    ) -> Result<Reply, DomainError> {
        let req = req.validate()?;

        let reply = Reply {
            id: Uuid::new_v4(),
            content: req.content,
            author_id: req.author_id,
            username: req.username,
            created_at: Utc::now(),
        };

        let appended = self.repo.push_reply(post_id, &reply).await?;
        if !appended {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::{ForumService, RECENT_POSTS_LIMIT};
    use crate::data::post_repository::{NewPost, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, CreateReplyRequest, Post, Reply};

    #[derive(Clone)]
    struct FakePostRepo {
        inserted_input: Arc<Mutex<Option<NewPost>>>,
        pushed_replies: Arc<Mutex<Vec<(i64, Reply)>>>,
        push_matches_post: Arc<Mutex<bool>>,
        list_result: Arc<Mutex<Vec<Post>>>,
        list_limit: Arc<Mutex<Option<i64>>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                inserted_input: Arc::new(Mutex::new(None)),
                pushed_replies: Arc::new(Mutex::new(Vec::new())),
                push_matches_post: Arc::new(Mutex::new(true)),
                list_result: Arc::new(Mutex::new(Vec::new())),
                list_limit: Arc::new(Mutex::new(None)),
            }
        }

        fn take_inserted_input(&self) -> Option<NewPost> {
            self.inserted_input
                .lock()
                .expect("inserted_input mutex poisoned")
                .take()
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn insert_post(&self, input: NewPost) -> Result<Post, DomainError> {
            let post = sample_post(1, &input.title, &input.content, &input.author_id);
            *self
                .inserted_input
                .lock()
                .expect("inserted_input mutex poisoned") = Some(input);
            Ok(post)
        }

        async fn list_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError> {
            *self.list_limit.lock().expect("list_limit mutex poisoned") = Some(limit);
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }

        async fn push_reply(&self, post_id: i64, reply: &Reply) -> Result<bool, DomainError> {
            if !*self
                .push_matches_post
                .lock()
                .expect("push_matches_post mutex poisoned")
            {
                return Ok(false);
            }
            self.pushed_replies
                .lock()
                .expect("pushed_replies mutex poisoned")
                .push((post_id, reply.clone()));
            Ok(true)
        }
    }

    #[tokio::test]
    async fn create_post_trims_before_persisting() {
        let repo = FakePostRepo::new();
        let service = ForumService::new(repo.clone());

        let created = service
            .create_post(sample_request("  title  ", "  content  "))
            .await
            .expect("create_post must succeed");

        assert_eq!(created.title, "title");
        assert_eq!(created.content, "content");

        let input = repo
            .take_inserted_input()
            .expect("insert must be called");
        assert_eq!(input.title, "title");
        assert_eq!(input.content, "content");
        assert_eq!(input.author_id, "1234567890");
        assert_eq!(input.username, "visitor");
    }

    #[tokio::test]
    async fn create_post_rejects_long_title_without_touching_store() {
        let repo = FakePostRepo::new();
        let service = ForumService::new(repo.clone());

        let err = service
            .create_post(sample_request(&"t".repeat(101), "content"))
            .await
            .expect_err("title must be rejected");

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(repo.take_inserted_input().is_none());
    }

    #[tokio::test]
    async fn add_reply_on_unknown_post_is_not_found() {
        let repo = FakePostRepo::new();
        *repo
            .push_matches_post
            .lock()
            .expect("push_matches_post mutex poisoned") = false;

        let service = ForumService::new(repo.clone());
        let err = service
            .add_reply(42, sample_reply_request("hello"))
            .await
            .expect_err("unknown post must fail");

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(
            repo.pushed_replies
                .lock()
                .expect("pushed_replies mutex poisoned")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn sequential_replies_append_in_call_order() {
        let repo = FakePostRepo::new();
        let service = ForumService::new(repo.clone());

        let first = service
            .add_reply(7, sample_reply_request("first"))
            .await
            .expect("first reply must succeed");
        let second = service
            .add_reply(7, sample_reply_request("second"))
            .await
            .expect("second reply must succeed");

        assert_ne!(first.id, second.id);

        let pushed = repo
            .pushed_replies
            .lock()
            .expect("pushed_replies mutex poisoned")
            .clone();
        assert_eq!(pushed.len(), 2);
        assert_eq!(pushed[0].0, 7);
        assert_eq!(pushed[0].1.content, "first");
        assert_eq!(pushed[1].1.content, "second");
    }

    #[tokio::test]
    async fn add_reply_validates_before_pushing() {
        let repo = FakePostRepo::new();
        let service = ForumService::new(repo.clone());

        let err = service
            .add_reply(7, sample_reply_request(&"r".repeat(1001)))
            .await
            .expect_err("long reply must be rejected");

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(
            repo.pushed_replies
                .lock()
                .expect("pushed_replies mutex poisoned")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn list_recent_uses_the_fixed_cutoff() {
        let repo = FakePostRepo::new();
        *repo.list_result.lock().expect("list_result mutex poisoned") =
            vec![sample_post(1, "a", "b", "1234567890")];

        let service = ForumService::new(repo.clone());
        let posts = service.list_recent().await.expect("list must succeed");

        assert_eq!(posts.len(), 1);
        assert_eq!(
            repo.list_limit
                .lock()
                .expect("list_limit mutex poisoned")
                .expect("limit must be recorded"),
            RECENT_POSTS_LIMIT
        );
    }

    fn sample_request(title: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        }
    }

    fn sample_reply_request(content: &str) -> CreateReplyRequest {
        CreateReplyRequest {
            content: content.to_string(),
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        }
    }

    fn sample_post(id: i64, title: &str, content: &str, author_id: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author_id: author_id.to_string(),
            username: "visitor".to_string(),
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }
}
