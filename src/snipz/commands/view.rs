use crate::commands::helpers::require_snippet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetRepository, StorageBackend};
use crate::template::extract_placeholders;

pub fn run<B: StorageBackend>(repo: &SnippetRepository<B>, key: &str) -> Result<CmdResult> {
    let snippet = require_snippet(repo, key)?;
    let placeholders = extract_placeholders(&snippet.record.text);

    let mut result = CmdResult::default();
    if placeholders.is_empty() {
        result.add_message(CmdMessage::info("No placeholders"));
    } else {
        let tokens: Vec<String> = placeholders.iter().map(|k| format!("{{{}}}", k)).collect();
        result.add_message(CmdMessage::info(format!("Placeholders: {}", tokens.join(" "))));
    }
    Ok(result.with_listed_snippets(vec![snippet]))
}
