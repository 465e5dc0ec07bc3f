//! CLI command implementations.
//!
//! Each command calls exactly one component operation and renders the
//! result; listings render as JSON.

use serde::Serialize;
use thiserror::Error;

use domain::time::format_timestamp;
use domain::CommentRecord;

use crate::cli::{CommentAction, Commands, TopicAction, VoteAction};
use crate::service::Services;

/// Why a command produced no output
#[derive(Error, Debug)]
pub enum CommandError {
    /// The component reported failure; details are in the log
    #[error("{0} failed")]
    Rejected(&'static str),

    #[error("command needs no database: {0}")]
    Offline(&'static str),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Run a command that needs no storage.
pub fn execute_offline(command: &Commands) -> Option<String> {
    match command {
        Commands::Ago { timestamp } => Some(format_timestamp(*timestamp)),
        _ => None,
    }
}

/// Run a command against the forum components and return what to print.
pub async fn execute(command: Commands, services: &Services) -> Result<String, CommandError> {
    match command {
        // Bootstrap and ping ran when `services` was connected
        Commands::InitDb => Ok("Database ready".to_string()),
        Commands::Register {
            username,
            email,
            password,
        } => {
            let ok = services.users.register(&username, &email, &password).await;
            confirm(ok, "register", format!("Registered {}", username))
        }
        Commands::Login { username, password } => {
            let ok = services.users.authenticate(&username, &password).await;
            confirm(ok, "login", format!("Authenticated {}", username))
        }
        Commands::Topic { action } => topic(action, services).await,
        Commands::Vote { action } => vote(action, services).await,
        Commands::Comment { action } => comment(action, services).await,
        Commands::Ago { .. } => Err(CommandError::Offline("ago")),
    }
}

async fn topic(action: TopicAction, services: &Services) -> Result<String, CommandError> {
    match action {
        TopicAction::Create {
            user_id,
            title,
            description,
        } => {
            let ok = services
                .topics
                .create_topic(user_id, &title, &description)
                .await;
            confirm(ok, "topic create", format!("Created topic '{}'", title))
        }
        TopicAction::List { user_id: Some(user_id) } => {
            render(&services.topics.list_topics_by_user(user_id).await)
        }
        TopicAction::List { user_id: None } => render(&services.topics.list_all_topics().await),
    }
}

async fn vote(action: VoteAction, services: &Services) -> Result<String, CommandError> {
    match action {
        VoteAction::Cast {
            user_id,
            topic_id,
            vote_type,
        } => {
            let ok = services.votes.cast_vote(user_id, topic_id, vote_type).await;
            confirm(ok, "vote cast", format!("Voted {} on topic {}", vote_type, topic_id))
        }
        VoteAction::Check { topic_id, user_id } => {
            Ok(services.votes.has_voted(topic_id, user_id).await.to_string())
        }
        VoteAction::History { user_id } => render(&services.votes.get_vote_history(user_id).await),
    }
}

async fn comment(action: CommentAction, services: &Services) -> Result<String, CommandError> {
    match action {
        CommentAction::Add {
            user_id,
            topic_id,
            text,
        } => {
            let ok = services.comments.add_comment(user_id, topic_id, &text).await;
            confirm(ok, "comment add", format!("Commented on topic {}", topic_id))
        }
        CommentAction::List { topic_id } => {
            let comments = services.comments.list_comments(topic_id).await;
            let views: Vec<CommentView> = comments.iter().map(CommentView::from).collect();
            render(&views)
        }
    }
}

/// Comment as printed, with a human-readable age next to the timestamp
#[derive(Serialize)]
struct CommentView<'a> {
    #[serde(flatten)]
    record: &'a CommentRecord,
    ago: String,
}

impl<'a> From<&'a CommentRecord> for CommentView<'a> {
    fn from(record: &'a CommentRecord) -> Self {
        Self {
            record,
            ago: format_timestamp(record.commented_at.timestamp()),
        }
    }
}

fn confirm(ok: bool, operation: &'static str, message: String) -> Result<String, CommandError> {
    if ok {
        Ok(message)
    } else {
        Err(CommandError::Rejected(operation))
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}
