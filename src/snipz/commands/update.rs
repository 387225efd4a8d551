use crate::commands::helpers::{require_snippet, tolerate_persistence};
use crate::commands::{CmdMessage, CmdResult, SnippetUpdate};
use crate::error::Result;
use crate::model::Snippet;
use crate::store::{SnippetRepository, StorageBackend};

pub fn run<B: StorageBackend>(
    repo: &mut SnippetRepository<B>,
    update: &SnippetUpdate,
) -> Result<CmdResult> {
    let current = require_snippet(repo, &update.key)?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for snippet: {}",
            update.key
        )));
        return Ok(result);
    }

    let mut record = current.record;
    if let Some(text) = &update.text {
        record.text = text.clone();
    }
    if let Some(icon) = &update.icon {
        record.icon = icon.clone();
    }
    if let Some(group) = &update.group {
        record.group = group.trim().to_string();
    }
    let new_key = update.new_key.as_deref().unwrap_or(&update.key);

    let outcome = repo.update(&update.key, new_key, record.clone());
    tolerate_persistence(&mut result, outcome)?;

    if new_key != update.key {
        result.add_message(CmdMessage::success(format!(
            "Snippet renamed: {} -> {}",
            update.key, new_key
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Snippet updated: {}", new_key)));
    }
    result.affected_snippets.push(Snippet::new(new_key, record));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipzError;
    use crate::model::SnippetRecord;
    use crate::test_utils::repo_with;

    #[test]
    fn changes_only_given_fields() {
        let mut repo = repo_with(&[("greet", "Hello, {1}!")]);
        repo.update(
            "greet",
            "greet",
            SnippetRecord::new("Hello, {1}!").with_icon("wave").with_group("chat"),
        )
        .unwrap();

        run(&mut repo, &SnippetUpdate::new("greet").text("Hi, {1}.")).unwrap();

        let record = repo.get("greet").unwrap();
        assert_eq!(record.text, "Hi, {1}.");
        assert_eq!(record.icon, "wave");
        assert_eq!(record.group, "chat");
    }

    #[test]
    fn empty_group_ungroups() {
        let mut repo = repo_with(&[("a", "A")]);
        run(&mut repo, &SnippetUpdate::new("a").group("G")).unwrap();
        assert_eq!(repo.get("a").unwrap().group, "G");

        run(&mut repo, &SnippetUpdate::new("a").group("")).unwrap();
        assert_eq!(repo.get("a").unwrap().group, "");
    }

    #[test]
    fn rename_keeps_position_and_attributes() {
        let mut repo = repo_with(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let result = run(&mut repo, &SnippetUpdate::new("b").rename("bee").icon("bug")).unwrap();

        assert_eq!(result.messages[0].content, "Snippet renamed: b -> bee");
        let keys: Vec<_> = repo.keys().collect();
        assert_eq!(keys, vec!["a", "bee", "c"]);
        assert_eq!(repo.get("bee").unwrap().text, "B");
        assert_eq!(repo.get("bee").unwrap().icon, "bug");
    }

    #[test]
    fn rename_onto_existing_key_fails() {
        let mut repo = repo_with(&[("a", "A"), ("b", "B")]);
        let err = run(&mut repo, &SnippetUpdate::new("a").rename("b")).unwrap_err();
        assert!(matches!(err, SnipzError::DuplicateKey(k) if k == "b"));
        assert_eq!(repo.get("a").unwrap().text, "A");
    }

    #[test]
    fn missing_snippet_is_not_found() {
        let mut repo = repo_with(&[]);
        let err = run(&mut repo, &SnippetUpdate::new("nope").text("x")).unwrap_err();
        assert!(matches!(err, SnipzError::NotFound(_)));
    }

    #[test]
    fn empty_update_is_reported() {
        let mut repo = repo_with(&[("a", "A")]);
        let saves = repo.backend().save_count();
        let result = run(&mut repo, &SnippetUpdate::new("a")).unwrap();

        assert!(result.messages[0].content.contains("Nothing to change"));
        assert_eq!(repo.backend().save_count(), saves);
    }
}
