use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::store::{SnippetRepository, StorageBackend};

/// Let a persistence failure through as a warning; propagate anything else.
///
/// Returns true when the change was also written to storage.
pub fn tolerate_persistence(result: &mut CmdResult, outcome: Result<()>) -> Result<bool> {
    match outcome {
        Ok(()) => Ok(true),
        Err(SnipzError::Persistence(reason)) => {
            result.add_message(CmdMessage::warning(format!(
                "Change kept in memory but could not be saved: {}",
                reason
            )));
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Fetch `key` as a `Snippet`, or fail with `NotFound`.
pub fn require_snippet<B: StorageBackend>(repo: &SnippetRepository<B>, key: &str) -> Result<Snippet> {
    repo.get(key)
        .map(|record| Snippet::new(key, record.clone()))
        .ok_or_else(|| SnipzError::NotFound(key.to_string()))
}

/// Convert a 1-based position from the UI to a repository index.
pub fn position_to_index(position: usize, len: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .filter(|index| *index < len)
        .ok_or(SnipzError::IndexOutOfRange {
            index: position,
            len,
        })
}
