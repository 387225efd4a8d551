use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::registry::{command_id, CommandRegistry};
use crate::template::has_placeholders;

/// Run the snippet `key` against `selection` through its registered command.
pub fn run(registry: &CommandRegistry, key: &str, selection: &str) -> Result<CmdResult> {
    let command = registry
        .find(&command_id(key))
        .ok_or_else(|| SnipzError::NotFound(key.to_string()))?;

    let output = command.run(selection);
    let mut result = CmdResult::default();
    if selection.trim().is_empty() && has_placeholders(&output) {
        result.add_message(CmdMessage::info(
            "Selection is empty; placeholders were left in place",
        ));
    }
    Ok(result.with_output(output))
}

/// The commands currently exposed, in snippet order.
pub fn list_commands(registry: &CommandRegistry) -> Result<CmdResult> {
    let mut result = CmdResult {
        commands: registry.commands().to_vec(),
        ..Default::default()
    };
    if result.commands.is_empty() {
        result.add_message(CmdMessage::info("No snippet commands registered."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::registry_for;

    #[test]
    fn applies_template() {
        let registry = registry_for(&[("quote", "> {1}\n> {2}")]);
        let result = run(&registry, "quote", "Hello\nworld\ntest").unwrap();
        assert_eq!(result.output.as_deref(), Some("> Hello\n> world test"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_selection_leaves_template() {
        let registry = registry_for(&[("greet", "Hello, {1}!")]);
        let result = run(&registry, "greet", "").unwrap();
        assert_eq!(result.output.as_deref(), Some("Hello, {1}!"));
        assert!(result.messages[0].content.contains("Selection is empty"));
    }

    #[test]
    fn unknown_key_is_not_found() {
        let registry = registry_for(&[]);
        assert!(matches!(
            run(&registry, "nope", "x"),
            Err(SnipzError::NotFound(k)) if k == "nope"
        ));
    }

    #[test]
    fn lists_registered_commands() {
        let registry = registry_for(&[("a", "A"), ("b", "B")]);
        let result = list_commands(&registry).unwrap();
        let ids: Vec<_> = result.commands.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["snippet:a", "snippet:b"]);
    }
}
