//! # Storage Layer
//!
//! This module owns the snippet set and its persistence.
//!
//! - [`repository::SnippetRepository`]: the ordered, validated set of
//!   snippets. All mutations go through it; it writes the full state after
//!   each one and emits a change event.
//! - [`backend::StorageBackend`]: the raw load/save port the repository is
//!   given at construction.
//!   - [`fs_backend::FsBackend`]: production JSON file storage
//!   - [`mem_backend::MemBackend`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── snippets.json   # {"snippets": {..}, "icons": {..}, "groups": {..}}
//! └── snipz.toml      # Optional configuration
//! ```
//!
//! The three maps share the same keys, in repository order. Files that lack
//! `icons` or `groups` are backfilled and rewritten when opened.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod repository;

pub use backend::StorageBackend;
pub use repository::SnippetRepository;
