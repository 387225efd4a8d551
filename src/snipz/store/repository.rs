use super::backend::StorageBackend;
use crate::error::{Result, SnipzError};
use crate::events::{ChangeEvent, ChangeKind, Listeners};
use crate::keys::validate_key;
use crate::model::{Snippet, SnippetRecord, StoredState, DEFAULT_ICON};
use indexmap::IndexMap;

/// The ordered set of snippets, kept in sync with a storage backend.
///
/// Every mutation checks all of its preconditions before touching memory, so
/// a failed call leaves the repository exactly as it was. A successful call
/// then writes the full state through the backend and notifies listeners.
///
/// If that write fails the in-memory change is kept, listeners are still
/// notified, and the call returns [`SnipzError::Persistence`]. The next
/// successful write persists the full state and brings disk back in line.
pub struct SnippetRepository<B: StorageBackend> {
    backend: B,
    entries: IndexMap<String, SnippetRecord>,
    default_icon: String,
    listeners: Listeners,
    closed: bool,
}

impl<B: StorageBackend> SnippetRepository<B> {
    /// Load the repository from `backend`.
    ///
    /// State written before icons or groups existed, or with attribute
    /// entries out of step with the snippet list, is repaired and written
    /// back immediately.
    pub fn open(backend: B, default_icon: impl Into<String>) -> Result<Self> {
        let default_icon = default_icon.into();
        let (entries, repaired) = match backend.load()? {
            Some(state) => state.into_entries(&default_icon),
            None => (IndexMap::new(), false),
        };

        let repo = Self {
            backend,
            entries,
            default_icon,
            listeners: Listeners::new(),
            closed: false,
        };
        tracing::debug!(
            location = %repo.backend.location(),
            snippets = repo.entries.len(),
            "loaded snippets"
        );

        // A failed write-back is logged by persist(); the repaired contents
        // are still usable and get written with the next mutation.
        if repaired {
            tracing::debug!("backfilling snippet icons and groups");
            let _ = repo.persist();
        }
        Ok(repo)
    }

    /// Open with the built-in default icon.
    pub fn with_backend(backend: B) -> Result<Self> {
        Self::open(backend, DEFAULT_ICON)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn default_icon(&self) -> &str {
        &self.default_icon
    }

    /// A record using this repository's default icon.
    pub fn new_record(&self, text: impl Into<String>) -> SnippetRecord {
        SnippetRecord::new(text).with_icon(self.default_icon.clone())
    }

    // --- Reads ---

    /// Ordered snapshot of all snippets.
    pub fn list(&self) -> Vec<Snippet> {
        self.entries
            .iter()
            .map(|(key, record)| Snippet::new(key.clone(), record.clone()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&SnippetRecord> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Zero-based position of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // --- Mutations ---

    /// Append a new snippet.
    pub fn add(&mut self, key: &str, record: SnippetRecord) -> Result<()> {
        self.ensure_open()?;
        check_key(key)?;
        if self.entries.contains_key(key) {
            return Err(SnipzError::DuplicateKey(key.to_string()));
        }

        self.entries.insert(key.to_string(), record);
        self.commit(ChangeKind::Added {
            key: key.to_string(),
        })
    }

    /// Add `key`, replacing an existing snippet of the same key in place.
    ///
    /// This is the confirmed form of [`add`](Self::add) for when the caller
    /// has already asked the user about the collision.
    pub fn overwrite(&mut self, key: &str, record: SnippetRecord) -> Result<()> {
        self.ensure_open()?;
        check_key(key)?;

        let kind = match self.entries.get_mut(key) {
            Some(existing) => {
                *existing = record;
                ChangeKind::Updated {
                    key: key.to_string(),
                }
            }
            None => {
                self.entries.insert(key.to_string(), record);
                ChangeKind::Added {
                    key: key.to_string(),
                }
            }
        };
        self.commit(kind)
    }

    /// Replace the attributes of `original_key`, renaming it to `new_key` when
    /// the two differ. A renamed snippet keeps its position.
    pub fn update(&mut self, original_key: &str, new_key: &str, record: SnippetRecord) -> Result<()> {
        self.ensure_open()?;
        let index = self
            .entries
            .get_index_of(original_key)
            .ok_or_else(|| SnipzError::NotFound(original_key.to_string()))?;

        if new_key == original_key {
            self.entries[index] = record;
            return self.commit(ChangeKind::Updated {
                key: original_key.to_string(),
            });
        }

        check_key(new_key)?;
        if self.entries.contains_key(new_key) {
            return Err(SnipzError::DuplicateKey(new_key.to_string()));
        }

        self.entries.shift_remove_index(index);
        self.entries.shift_insert(index, new_key.to_string(), record);
        self.commit(ChangeKind::Renamed {
            from: original_key.to_string(),
            to: new_key.to_string(),
        })
    }

    /// Remove `key` together with all of its attributes.
    pub fn delete(&mut self, key: &str) -> Result<SnippetRecord> {
        self.ensure_open()?;
        let record = self
            .entries
            .shift_remove(key)
            .ok_or_else(|| SnipzError::NotFound(key.to_string()))?;

        self.commit(ChangeKind::Deleted {
            key: key.to_string(),
        })?;
        Ok(record)
    }

    /// Move the snippet at `from` to `to`, shifting everything in between by
    /// one slot. Moving `[a, b, c]` from 0 to 2 gives `[b, c, a]`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.ensure_open()?;
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(SnipzError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        self.entries.move_index(from, to);
        self.commit(ChangeKind::Reordered { from, to })
    }

    // --- Lifecycle ---

    /// Register a listener for "contents changed" events.
    ///
    /// The listener is not called for the current contents; call
    /// [`announce`](Self::announce) to deliver a `Loaded` event on demand.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.listeners.subscribe(listener);
    }

    /// Notify listeners of the current contents without changing anything.
    pub fn announce(&mut self) {
        self.emit(ChangeKind::Loaded);
    }

    /// Stop accepting mutations and drop all listeners.
    ///
    /// Reads keep working; every mutation afterwards fails with
    /// [`SnipzError::Closed`] and nothing more is written to the backend.
    pub fn close(&mut self) {
        if !self.closed {
            tracing::debug!("closing snippet repository");
        }
        self.closed = true;
        self.listeners.clear();
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(SnipzError::Closed)
        } else {
            Ok(())
        }
    }

    fn commit(&mut self, kind: ChangeKind) -> Result<()> {
        let saved = self.persist();
        self.emit(kind);
        saved
    }

    fn persist(&self) -> Result<()> {
        let state = StoredState::from_entries(&self.entries);
        self.backend.save(&state).map_err(|e| {
            tracing::warn!(location = %self.backend.location(), error = %e, "failed to persist snippets");
            SnipzError::Persistence(e.to_string())
        })
    }

    fn emit(&mut self, kind: ChangeKind) {
        tracing::debug!(change = ?kind, snippets = self.entries.len(), "snippets changed");
        let event = ChangeEvent::new(kind, &self.entries);
        self.listeners.emit(&event);
    }
}

fn check_key(key: &str) -> Result<()> {
    validate_key(key).map_err(|reason| SnipzError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}
