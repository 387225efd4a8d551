//! The "contents changed" signal.
//!
//! The repository does not know who displays its snippets. After every
//! successful mutation it emits a [`ChangeEvent`] to the listeners registered
//! with [`Listeners::subscribe`]; command registries, menus and any other
//! view resynchronize from the event instead of being called directly.

use crate::model::{Snippet, SnippetRecord};
use indexmap::IndexMap;

/// What happened to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Loaded,
    Added { key: String },
    Updated { key: String },
    Renamed { from: String, to: String },
    Deleted { key: String },
    Reordered { from: usize, to: usize },
}

/// Delivered to listeners after a change, borrowing the current contents.
#[derive(Debug)]
pub struct ChangeEvent<'a> {
    pub kind: ChangeKind,
    entries: &'a IndexMap<String, SnippetRecord>,
}

impl<'a> ChangeEvent<'a> {
    pub(crate) fn new(kind: ChangeKind, entries: &'a IndexMap<String, SnippetRecord>) -> Self {
        Self { kind, entries }
    }

    /// Current contents in repository order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a SnippetRecord)> + 'a {
        let entries: &'a IndexMap<String, SnippetRecord> = self.entries;
        entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the contents.
    pub fn snapshot(&self) -> Vec<Snippet> {
        self.entries
            .iter()
            .map(|(k, r)| Snippet::new(k.clone(), r.clone()))
            .collect()
    }
}

pub type Listener = Box<dyn FnMut(&ChangeEvent<'_>)>;

/// Registered listeners, notified in registration order.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &ChangeEvent<'_>) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
