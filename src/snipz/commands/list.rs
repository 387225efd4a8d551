use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetRepository, StorageBackend};

/// List snippets in repository order, optionally only those in `group`.
///
/// An empty `group` filter selects the ungrouped snippets.
pub fn run<B: StorageBackend>(
    repo: &SnippetRepository<B>,
    group: Option<&str>,
) -> Result<CmdResult> {
    let mut snippets = repo.list();
    if let Some(group) = group {
        let group = group.trim();
        snippets.retain(|s| s.record.group == group);
    }

    let mut result = CmdResult::default();
    if snippets.is_empty() {
        let message = match group {
            Some(g) if !g.trim().is_empty() => format!("No snippets in group: {}", g.trim()),
            _ => "No snippets found.".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed_snippets(snippets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{update, SnippetUpdate};
    use crate::test_utils::repo_with;

    #[test]
    fn lists_in_order() {
        let repo = repo_with(&[("z", "Z"), ("a", "A")]);
        let result = run(&repo, None).unwrap();
        let keys: Vec<_> = result.listed_snippets.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_group() {
        let mut repo = repo_with(&[("a", "A"), ("b", "B"), ("c", "C")]);
        update::run(&mut repo, &SnippetUpdate::new("b").group("work")).unwrap();

        let work = run(&repo, Some("work")).unwrap();
        assert_eq!(work.listed_snippets.len(), 1);
        assert_eq!(work.listed_snippets[0].key, "b");

        let ungrouped = run(&repo, Some("")).unwrap();
        let keys: Vec<_> = ungrouped.listed_snippets.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn empty_results_explain_themselves() {
        let repo = repo_with(&[]);
        assert_eq!(run(&repo, None).unwrap().messages[0].content, "No snippets found.");

        let repo = repo_with(&[("a", "A")]);
        assert_eq!(
            run(&repo, Some("nope")).unwrap().messages[0].content,
            "No snippets in group: nope"
        );
    }
}
