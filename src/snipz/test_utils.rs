use crate::model::SnippetRecord;
use crate::registry::CommandRegistry;
use crate::store::mem_backend::MemBackend;
use crate::store::SnippetRepository;

pub fn mem_repo() -> SnippetRepository<MemBackend> {
    SnippetRepository::with_backend(MemBackend::new()).expect("in-memory repository opens")
}

/// A repository holding `(key, text)` pairs in the given order.
pub fn repo_with(entries: &[(&str, &str)]) -> SnippetRepository<MemBackend> {
    let mut repo = mem_repo();
    for (key, text) in entries {
        repo.add(key, SnippetRecord::new(*text))
            .expect("test snippet is valid");
    }
    repo
}

/// A command registry synced from `(key, text)` pairs.
pub fn registry_for(entries: &[(&str, &str)]) -> CommandRegistry {
    let repo = repo_with(entries);
    let mut registry = CommandRegistry::new();
    registry.sync(
        repo.list()
            .iter()
            .map(|s| (s.key.as_str(), &s.record))
            .collect::<Vec<_>>(),
    );
    registry
}
