//! # Command Layer
//!
//! This module contains the **core business logic** of snipz. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `SnippetRepository`, `Snippet`, and other domain types
//! - Return structured `CmdResult` with affected snippets and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts, confirmations (return data, UI decides)
//!
//! ## Persistence Failures
//!
//! A snippet change whose durable write failed is still a change: the
//! repository keeps it in memory. Commands therefore turn
//! [`SnipzError::Persistence`](crate::error::SnipzError::Persistence) into a
//! warning on the `CmdResult` instead of an error. Every other error aborts the
//! command.
//!
//! ## Command Modules
//!
//! - [`add`]: Create snippets (optionally overwriting)
//! - [`update`]: Change text, icon, group, or key
//! - [`delete`]: Remove snippets
//! - [`reorder`]: Move a snippet to another position
//! - [`list`]: List snippets, optionally one group
//! - [`view`]: Show one snippet and its placeholders
//! - [`apply`]: Run a snippet against a selection
//! - [`menu`]: Build the grouped menu
//! - [`helpers`]: Shared utilities

use crate::menu::MenuItem;
use crate::model::Snippet;
use crate::registry::SnippetCommand;
use serde::Serialize;

pub mod add;
pub mod apply;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod menu;
pub mod reorder;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listed_snippets: Vec<Snippet>,
    /// Text produced by applying a snippet.
    pub output: Option<String>,
    pub menu: Vec<MenuItem>,
    pub commands: Vec<SnippetCommand>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

/// Partial change to one snippet. Fields left as `None` keep their value.
#[derive(Debug, Clone, Default)]
pub struct SnippetUpdate {
    pub key: String,
    pub new_key: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
    pub group: Option<String>,
}

impl SnippetUpdate {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn rename(mut self, new_key: impl Into<String>) -> Self {
        self.new_key = Some(new_key.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.new_key.is_none() && self.text.is_none() && self.icon.is_none() && self.group.is_none()
    }
}
