//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet library**. A snippet is a short named
//! template with numbered placeholders (`{1}`, `{2}`, ...) that get filled
//! from the user's current selection. The library stores snippets, keeps
//! their order, and performs the substitution; any UI (a CLI, an editor
//! plugin, a launcher) sits on top.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the repository and the command registry             │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetRepository: ordered, validated, atomic changes    │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit the pure pieces everything else builds on:
//! [`keys`] (key validation), [`template`] (placeholder substitution) and
//! [`menu`] (grouping for display).
//!
//! ## Change Events
//!
//! The repository does not call into any UI. After each change it emits an
//! [`events::ChangeEvent`]; the [`registry::CommandRegistry`] (one command per
//! snippet) is kept current that way, and any other view can subscribe the
//! same way.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Repository, storage abstraction and implementations
//! - [`model`]: Core data types (`SnippetRecord`, `Snippet`, `StoredState`)
//! - [`keys`]: Snippet key validation
//! - [`template`]: Placeholder extraction and substitution
//! - [`menu`]: Grouped menu layout
//! - [`events`]: The "contents changed" signal
//! - [`registry`]: Per-snippet commands
//! - [`config`]: Configuration management
//! - [`init`]: Wiring for the file-backed API
//! - [`logging`]: Subscriber setup for clients
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod init;
pub mod keys;
pub mod logging;
pub mod menu;
pub mod model;
pub mod registry;
pub mod store;
pub mod template;

#[cfg(test)]
pub(crate) mod test_utils;
