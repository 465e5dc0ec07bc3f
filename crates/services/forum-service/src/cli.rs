//! CLI argument definitions.

use clap::{Parser, Subcommand};

use domain::{TopicId, UserId, VoteType};

/// Forum backend command-line interface
#[derive(Parser, Debug)]
#[command(name = "forum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides FORUM_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create missing tables and check connectivity.
    ///
    /// Connecting already bootstraps the schema and pings the database, so
    /// reaching this command means both succeeded.
    InitDb,

    /// Register a new user
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FORUM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Check a username/password pair
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "FORUM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Topic commands
    Topic {
        #[command(subcommand)]
        action: TopicAction,
    },

    /// Vote commands
    Vote {
        #[command(subcommand)]
        action: VoteAction,
    },

    /// Comment commands
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Print a Unix timestamp relative to now
    Ago {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
    },
}

/// Topic actions
#[derive(Subcommand, Debug)]
pub enum TopicAction {
    /// Create a topic
    Create {
        #[arg(long)]
        user_id: UserId,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List topics, optionally only those created by one user
    List {
        #[arg(long)]
        user_id: Option<UserId>,
    },
}

/// Vote actions
#[derive(Subcommand, Debug)]
pub enum VoteAction {
    /// Cast a vote ("up" or "down")
    Cast {
        #[arg(long)]
        user_id: UserId,
        #[arg(long)]
        topic_id: TopicId,
        #[arg(long = "type", default_value = "up")]
        vote_type: VoteType,
    },
    /// Check whether a user voted on a topic
    Check {
        #[arg(long)]
        topic_id: TopicId,
        #[arg(long)]
        user_id: UserId,
    },
    /// Show a user's vote history
    History {
        #[arg(long)]
        user_id: UserId,
    },
}

/// Comment actions
#[derive(Subcommand, Debug)]
pub enum CommentAction {
    /// Comment on a topic
    Add {
        #[arg(long)]
        user_id: UserId,
        #[arg(long)]
        topic_id: TopicId,
        text: String,
    },
    /// List comments on a topic
    List {
        #[arg(long)]
        topic_id: TopicId,
    },
}
