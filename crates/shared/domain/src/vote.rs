//! Vote domain entity and vote type.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{VOTE_DOWN, VOTE_UP};
use crate::error::DomainError;
use crate::topic::TopicId;
use crate::user::UserId;

/// Vote direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Value stored in `Votes.vote_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => VOTE_UP,
            VoteType::Down => VOTE_DOWN,
        }
    }
}

impl FromStr for VoteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VOTE_UP => Ok(VoteType::Up),
            VOTE_DOWN => Ok(VoteType::Down),
            other => Err(DomainError::validation(format!(
                "Unknown vote type '{}'",
                other
            ))),
        }
    }
}

impl From<VoteType> for String {
    fn from(vote_type: VoteType) -> Self {
        vote_type.as_str().to_string()
    }
}

impl std::fmt::Display for VoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vote domain entity. At most one per `(user_id, topic_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub vote_type: VoteType,
    pub voted_at: DateTime<Utc>,
}

/// Vote history record: `{topic_id, vote_type, voted_at}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub topic_id: TopicId,
    pub vote_type: VoteType,
    pub voted_at: DateTime<Utc>,
}

impl From<Vote> for VoteRecord {
    fn from(vote: Vote) -> Self {
        Self {
            topic_id: vote.topic_id,
            vote_type: vote.vote_type,
            voted_at: vote.voted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_type_parse() {
        assert_eq!("up".parse::<VoteType>(), Ok(VoteType::Up));
        assert_eq!("down".parse::<VoteType>(), Ok(VoteType::Down));
        assert!(matches!(
            "sideways".parse::<VoteType>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_vote_type_display_matches_storage() {
        assert_eq!(VoteType::Up.to_string(), VOTE_UP);
        assert_eq!(String::from(VoteType::Down), VOTE_DOWN);
    }

    #[test]
    fn test_vote_record_serializes_lowercase() {
        let record = VoteRecord {
            topic_id: 7,
            vote_type: VoteType::Down,
            voted_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["vote_type"], "down");
        assert_eq!(json["topic_id"], 7);
    }
}
