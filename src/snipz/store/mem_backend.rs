use super::backend::StorageBackend;
use crate::error::{Result, SnipzError};
use crate::model::StoredState;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since snipz is single-threaded.
/// Counts successful saves so tests can assert exactly when the repository
/// persisted.
#[derive(Default)]
pub struct MemBackend {
    state: RefCell<Option<StoredState>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted content.
    pub fn with_state(state: StoredState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What was last persisted.
    pub fn stored(&self) -> Option<StoredState> {
        self.state.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<StoredState>> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SnipzError::Store("Simulated write error".to_string()));
        }
        *self.state.borrow_mut() = Some(state.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://snippets".to_string()
    }
}
