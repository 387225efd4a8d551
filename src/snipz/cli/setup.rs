use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(about = "Text snippets with selection placeholders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding snippets.json and snipz.toml
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List snippets in order
    #[command(alias = "ls")]
    List {
        /// Only show snippets in this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Show a snippet's text and placeholders
    #[command(alias = "v")]
    View { key: String },

    /// Add a snippet (text is read from stdin when omitted)
    #[command(alias = "n")]
    Add {
        key: String,

        text: Option<String>,

        #[arg(short, long)]
        icon: Option<String>,

        #[arg(short, long)]
        group: Option<String>,

        /// Overwrite an existing snippet with the same key
        #[arg(short, long)]
        force: bool,
    },

    /// Change a snippet's key, text, icon or group
    #[command(alias = "e")]
    Edit {
        key: String,

        /// New key, keeping the snippet's position
        #[arg(short, long, value_name = "KEY")]
        rename: Option<String>,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        icon: Option<String>,

        /// New group (empty string to ungroup)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Move a snippet between positions (1-based, as shown by list)
    #[command(alias = "mv")]
    Move { from: usize, to: usize },

    /// Fill a snippet's placeholders (selection is read from stdin when omitted)
    Apply {
        key: String,

        #[arg(short, long)]
        selection: Option<String>,
    },

    /// Show the snippet menu
    Menu,

    /// List the registered snippet commands
    Commands,

    /// Show the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_parses() {
        let cli = Cli::try_parse_from(["snipz"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::try_parse_from(["snipz", "rm", "a", "b"]).unwrap();
        match cli.command {
            Some(Commands::Delete { keys }) => assert_eq!(keys, vec!["a", "b"]),
            other => panic!("unexpected: {:?}", other),
        }

        let cli = Cli::try_parse_from(["snipz", "mv", "1", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Move { from: 1, to: 3 })
        ));
    }

    #[test]
    fn add_with_flags() {
        let cli = Cli::try_parse_from([
            "snipz", "add", "greet", "Hello, {1}!", "--group", "mail", "--force",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                key,
                text,
                icon,
                group,
                force,
            }) => {
                assert_eq!(key, "greet");
                assert_eq!(text.as_deref(), Some("Hello, {1}!"));
                assert!(icon.is_none());
                assert_eq!(group.as_deref(), Some("mail"));
                assert!(force);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["snipz", "list", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn delete_requires_a_key() {
        assert!(Cli::try_parse_from(["snipz", "delete"]).is_err());
    }
}
