//! Votes on topics.
//!
//! One vote per user per topic. The storage key decides: a second insert
//! for the same pair is rejected, so concurrent duplicates cannot both land.
//! A vote is never changed or withdrawn once cast.

use std::sync::Arc;

use domain::{TopicId, UserId, VoteRecord, VoteType};

use super::{or_empty, succeeded};
use crate::repository::VoteRepository;

/// Records and queries votes on topics.
pub struct VoteLedger {
    repo: Arc<dyn VoteRepository>,
}

impl VoteLedger {
    pub fn new(repo: Arc<dyn VoteRepository>) -> Self {
        Self { repo }
    }

    /// Cast a vote. Returns `false` if the user already voted on the topic.
    pub async fn cast_vote(&self, user_id: UserId, topic_id: TopicId, vote_type: VoteType) -> bool {
        let result = self
            .repo
            .create(user_id, topic_id, vote_type)
            .await
            .inspect(|_| tracing::info!(user_id, topic_id, %vote_type, "Vote cast"));

        succeeded("cast_vote", result)
    }

    /// Whether `user_id` has voted on `topic_id`. Lookup failures read as `false`.
    pub async fn has_voted(&self, topic_id: TopicId, user_id: UserId) -> bool {
        match self.repo.exists(topic_id, user_id).await {
            Ok(voted) => voted,
            Err(e) => {
                e.log("has_voted");
                false
            }
        }
    }

    /// Votes cast by `user_id`, oldest first.
    pub async fn get_vote_history(&self, user_id: UserId) -> Vec<VoteRecord> {
        let result = self.repo.list_by_user(user_id).await;
        or_empty("get_vote_history", result)
            .into_iter()
            .map(VoteRecord::from)
            .collect()
    }
}
