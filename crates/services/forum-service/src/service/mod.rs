//! Forum components.
//!
//! Each component keeps failure causes internal: errors are logged and then
//! folded into `false` for mutations or an empty list for reads.

mod comment_thread;
mod container;
mod topic_catalog;
mod user_account;
mod vote_ledger;

pub use comment_thread::CommentThread;
pub use container::Services;
pub use topic_catalog::TopicCatalog;
pub use user_account::UserAccount;
pub use vote_ledger::VoteLedger;

use common::AppResult;

/// Fold a mutation result into its success flag.
fn succeeded<T>(operation: &'static str, result: AppResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            e.log(operation);
            false
        }
    }
}

/// Fold a listing result, reading any failure as "nothing found".
fn or_empty<T>(operation: &'static str, result: AppResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        e.log(operation);
        Vec::new()
    })
}
