//! # Command Registry
//!
//! Every snippet is exposed as one invocable command whose id is
//! [`COMMAND_PREFIX`] followed by the snippet key. Invoking a command feeds
//! the caller's selection through the template engine and returns the text
//! that should replace the selection.
//!
//! The registry holds its own copy of the snippets and is refreshed from the
//! repository's change events (see [`crate::api::SnipzApi`]), so it never
//! reaches into the repository directly.

use crate::error::{Result, SnipzError};
use crate::events::ChangeEvent;
use crate::model::SnippetRecord;
use crate::template::process_template;
use serde::Serialize;

pub const COMMAND_PREFIX: &str = "snippet:";

/// The command id for `key`.
pub fn command_id(key: &str) -> String {
    format!("{}{}", COMMAND_PREFIX, key)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetCommand {
    pub id: String,
    pub name: String,
    pub key: String,
    pub icon: String,
    #[serde(skip)]
    text: String,
}

impl SnippetCommand {
    fn new(key: &str, record: &SnippetRecord) -> Self {
        Self {
            id: command_id(key),
            name: format!("Insert snippet: {}", key),
            key: key.to_string(),
            icon: record.icon.clone(),
            text: record.text.clone(),
        }
    }

    /// The text that replaces `selection`.
    pub fn run(&self, selection: &str) -> String {
        process_template(&self.text, selection)
    }
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<SnippetCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all commands with one per entry, in the given order.
    pub fn sync<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, &'a SnippetRecord)>,
    {
        self.commands = entries
            .into_iter()
            .map(|(key, record)| SnippetCommand::new(key, record))
            .collect();
        tracing::debug!(commands = self.commands.len(), "command registry synced");
    }

    /// Resynchronize from a repository change event.
    pub fn handle_change(&mut self, event: &ChangeEvent<'_>) {
        self.sync(event.entries());
    }

    pub fn commands(&self) -> &[SnippetCommand] {
        &self.commands
    }

    pub fn find(&self, id: &str) -> Option<&SnippetCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Run the command `id` against `selection`.
    pub fn invoke(&self, id: &str, selection: &str) -> Result<String> {
        self.find(id)
            .map(|command| command.run(selection))
            .ok_or_else(|| SnipzError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
