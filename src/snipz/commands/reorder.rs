use crate::commands::helpers::{position_to_index, tolerate_persistence};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetRepository, StorageBackend};

/// Move the snippet at 1-based position `from` to position `to`.
pub fn run<B: StorageBackend>(
    repo: &mut SnippetRepository<B>,
    from: usize,
    to: usize,
) -> Result<CmdResult> {
    let len = repo.len();
    let from_index = position_to_index(from, len)?;
    let to_index = position_to_index(to, len)?;
    let mut result = CmdResult::default();

    if from_index == to_index {
        result.add_message(CmdMessage::info("Snippet is already in place"));
        return Ok(result.with_listed_snippets(repo.list()));
    }

    let outcome = repo.reorder(from_index, to_index);
    tolerate_persistence(&mut result, outcome)?;

    let moved = repo.list();
    result.add_message(CmdMessage::success(format!(
        "Snippet moved: {} ({} -> {})",
        moved[to_index].key, from, to
    )));
    result.affected_snippets.push(moved[to_index].clone());
    Ok(result.with_listed_snippets(moved))
}
