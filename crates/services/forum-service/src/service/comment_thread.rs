//! Comments on topics.

use std::sync::Arc;

use domain::{CommentRecord, TopicId, UserId};

use super::{or_empty, succeeded};
use crate::repository::CommentRepository;

/// Records and lists comments on topics.
pub struct CommentThread {
    repo: Arc<dyn CommentRepository>,
}

impl CommentThread {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    /// Add a comment. The text is stored as given, empty or not.
    pub async fn add_comment(&self, user_id: UserId, topic_id: TopicId, text: &str) -> bool {
        let result = self
            .repo
            .create(user_id, topic_id, text.to_string())
            .await
            .inspect(|_| tracing::debug!(user_id, topic_id, "Comment added"));

        succeeded("add_comment", result)
    }

    /// Comments on `topic_id` in the order they were added.
    pub async fn list_comments(&self, topic_id: TopicId) -> Vec<CommentRecord> {
        let result = self.repo.list_by_topic(topic_id).await;
        or_empty("list_comments", result)
            .into_iter()
            .map(CommentRecord::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCommentRepository;
    use chrono::Utc;
    use common::AppError;
    use domain::Comment;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_add_comment() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create()
            .with(eq(1), eq(2), eq("First!".to_string()))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let thread = CommentThread::new(Arc::new(repo));
        assert!(thread.add_comment(1, 2, "First!").await);
    }

    #[tokio::test]
    async fn test_add_comment_failure() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::internal("disk full")));

        let thread = CommentThread::new(Arc::new(repo));
        assert!(!thread.add_comment(1, 2, "lost").await);
    }

    #[tokio::test]
    async fn test_list_comments_drops_topic_id() {
        let commented_at = Utc::now();
        let mut repo = MockCommentRepository::new();
        repo.expect_list_by_topic().with(eq(2)).returning(move |topic_id| {
            Ok(vec![Comment {
                user_id: 1,
                topic_id,
                comment: "Nice".to_string(),
                commented_at,
            }])
        });

        let thread = CommentThread::new(Arc::new(repo));
        let comments = thread.list_comments(2).await;

        assert_eq!(
            comments,
            vec![CommentRecord {
                user_id: 1,
                comment: "Nice".to_string(),
                commented_at,
            }]
        );
    }
}
