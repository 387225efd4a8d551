use crate::error::Result;
use crate::model::StoredState;

/// Abstract interface for durable snippet storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `SnippetRepository` handles the "what" (validation, ordering, migration).
/// Both methods take `&self`; backends that hold state use interior
/// mutability.
pub trait StorageBackend {
    /// Load the persisted state.
    /// Returns Ok(None) when nothing has been saved yet.
    fn load(&self) -> Result<Option<StoredState>>;

    /// Replace the persisted state with `state`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, state: &StoredState) -> Result<()>;

    /// Human-readable location of the stored state, for diagnostics.
    fn location(&self) -> String;
}
