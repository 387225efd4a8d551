use crate::commands::helpers::tolerate_persistence;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Snippet;
use crate::store::{SnippetRepository, StorageBackend};

/// Create a snippet. With `force`, an existing snippet of the same key is
/// replaced in place instead of failing with `DuplicateKey`.
pub fn run<B: StorageBackend>(
    repo: &mut SnippetRepository<B>,
    key: &str,
    text: String,
    icon: Option<String>,
    group: Option<String>,
    force: bool,
) -> Result<CmdResult> {
    let mut record = repo.new_record(text);
    if let Some(icon) = icon {
        record.icon = icon;
    }
    if let Some(group) = group {
        record.group = group.trim().to_string();
    }

    let existed = repo.contains(key);
    let outcome = if force {
        repo.overwrite(key, record.clone())
    } else {
        repo.add(key, record.clone())
    };

    let mut result = CmdResult::default();
    tolerate_persistence(&mut result, outcome)?;

    let verb = if existed { "overwritten" } else { "added" };
    result.add_message(CmdMessage::success(format!("Snippet {}: {}", verb, key)));
    result.affected_snippets.push(Snippet::new(key, record));
    Ok(result)
}
