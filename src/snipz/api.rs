//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all snipz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the snippet repository and the command registry for the
//!   lifetime of the client (it is the composition root)
//! - **Wires** the registry to the repository's change events
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Lifecycle
//!
//! 1. Open a [`SnippetRepository`] over a storage backend (this loads and, if
//!    needed, backfills the stored snippets).
//! 2. [`SnipzApi::new`] subscribes the command registry and syncs it once.
//! 3. Every mutation through the facade resyncs the registry via the change
//!    event.
//! 4. [`SnipzApi::shutdown`] closes the repository and drops the backend.
//!
//! ## Generic Over StorageBackend
//!
//! `SnipzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `SnipzApi<FsBackend>`
//! - Testing: `SnipzApi<MemBackend>`

use crate::commands::{self, CmdResult, SnippetUpdate};
use crate::error::Result;
use crate::registry::CommandRegistry;
use crate::store::{SnippetRepository, StorageBackend};
use std::cell::RefCell;
use std::rc::Rc;

pub struct SnipzApi<B: StorageBackend> {
    repo: SnippetRepository<B>,
    registry: Rc<RefCell<CommandRegistry>>,
}

impl<B: StorageBackend> SnipzApi<B> {
    pub fn new(mut repo: SnippetRepository<B>) -> Self {
        let registry = Rc::new(RefCell::new(CommandRegistry::new()));
        let sink = Rc::clone(&registry);
        repo.subscribe(move |event| sink.borrow_mut().handle_change(event));
        repo.announce();
        Self { repo, registry }
    }

    pub fn repository(&self) -> &SnippetRepository<B> {
        &self.repo
    }

    pub fn add_snippet(
        &mut self,
        key: &str,
        text: String,
        icon: Option<String>,
        group: Option<String>,
        force: bool,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.repo, key, text, icon, group, force)
    }

    pub fn update_snippet(&mut self, update: &SnippetUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.repo, update)
    }

    pub fn delete_snippets<K: AsRef<str>>(&mut self, keys: &[K]) -> Result<CmdResult> {
        commands::delete::run(&mut self.repo, keys)
    }

    /// Move a snippet between 1-based positions.
    pub fn move_snippet(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        commands::reorder::run(&mut self.repo, from, to)
    }

    pub fn list_snippets(&self, group: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.repo, group)
    }

    pub fn view_snippet(&self, key: &str) -> Result<CmdResult> {
        commands::view::run(&self.repo, key)
    }

    pub fn apply_snippet(&self, key: &str, selection: &str) -> Result<CmdResult> {
        commands::apply::run(&self.registry.borrow(), key, selection)
    }

    /// Invoke a registered command by id, returning the replacement text.
    pub fn invoke_command(&self, id: &str, selection: &str) -> Result<String> {
        self.registry.borrow().invoke(id, selection)
    }

    pub fn list_commands(&self) -> Result<CmdResult> {
        commands::apply::list_commands(&self.registry.borrow())
    }

    pub fn menu(&self) -> Result<CmdResult> {
        commands::menu::run(&self.repo)
    }

    /// Stop accepting changes and release the storage backend.
    pub fn shutdown(mut self) {
        self.repo.close();
    }
}
