use crate::commands::helpers::tolerate_persistence;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::store::{SnippetRepository, StorageBackend};

/// Delete each key in turn. Stops at the first key that does not exist;
/// snippets deleted before it stay deleted.
pub fn run<B: StorageBackend, K: AsRef<str>>(
    repo: &mut SnippetRepository<B>,
    keys: &[K],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for key in keys {
        let key = key.as_ref();
        let record = repo
            .get(key)
            .cloned()
            .ok_or_else(|| SnipzError::NotFound(key.to_string()))?;

        let outcome = repo.delete(key).map(|_| ());
        tolerate_persistence(&mut result, outcome)?;

        result.add_message(CmdMessage::success(format!("Snippet deleted: {}", key)));
        result.affected_snippets.push(Snippet::new(key, record));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::repo_with;

    #[test]
    fn deletes_snippets() {
        let mut repo = repo_with(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let result = run(&mut repo, &["a", "c"]).unwrap();

        assert_eq!(result.affected_snippets.len(), 2);
        let keys: Vec<_> = repo.keys().collect();
        assert_eq!(keys, vec!["b"]);

        let stored = repo.backend().stored().unwrap();
        assert!(!stored.icons.as_ref().unwrap().contains_key("a"));
        assert!(!stored.groups.as_ref().unwrap().contains_key("c"));
    }

    #[test]
    fn missing_key_is_not_found() {
        let mut repo = repo_with(&[("a", "A"), ("b", "B")]);
        let err = run(&mut repo, &["a", "zzz", "b"]).unwrap_err();

        assert!(matches!(err, SnipzError::NotFound(k) if k == "zzz"));
        // "a" went before the failure, "b" was never reached
        let keys: Vec<_> = repo.keys().collect();
        assert_eq!(keys, vec!["b"]);
    }
}
