//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` so output can be checked without a terminal; styling comes from
//! `console`, which drops colors when stdout is not a tty.
//!
//! Layout (width, truncation, padding) is computed with `unicode-width` so
//! keys and previews line up with wide characters.

use super::styles;
use snipz::commands::{CmdMessage, MessageLevel};
use snipz::menu::MenuItem;
use snipz::model::Snippet;
use snipz::registry::SnippetCommand;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const KEY_WIDTH: usize = 16;
const SEPARATOR: &str = "--------------------------------";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        output.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    output
}

/// One line per `(position, snippet)`: position, key, a one-line preview of
/// the text and the group, if any, on the right.
pub fn render_snippet_list(rows: &[(usize, &Snippet)]) -> String {
    let mut output = String::new();

    for (position, snippet) in rows {
        let index = format!("{:>3}. ", position);
        let key = pad_to_width(&snippet.key, KEY_WIDTH);
        let group = if snippet.record.is_grouped() {
            format!("  [{}]", snippet.record.group)
        } else {
            String::new()
        };

        let fixed = index.width() + key.width() + 2 + group.width();
        let available = LINE_WIDTH.saturating_sub(fixed);
        let preview = truncate_to_width(&one_line(&snippet.record.text), available);

        output.push_str(&format!(
            "{}{}  {}{}\n",
            styles::INDEX.apply_to(index),
            styles::KEY.apply_to(key),
            preview,
            styles::GROUP.apply_to(group)
        ));
    }

    output
}

pub fn render_full_snippet(snippet: &Snippet) -> String {
    let mut details = format!("icon: {}", snippet.record.icon);
    if snippet.record.is_grouped() {
        details.push_str(&format!("  group: {}", snippet.record.group));
    }

    format!(
        "{}\n{}\n{}\n{}\n",
        styles::KEY.apply_to(&snippet.key),
        styles::DIMMED.apply_to(details),
        SEPARATOR,
        snippet.record.text
    )
}

/// The menu as an indented tree; folders end with `/`.
pub fn render_menu(items: &[MenuItem]) -> String {
    let mut output = String::new();
    render_menu_level(items, 0, &mut output);
    output
}

fn render_menu_level(items: &[MenuItem], depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            MenuItem::Snippet { key, icon } => {
                output.push_str(&format!(
                    "{}{} {}\n",
                    indent,
                    key,
                    styles::ICON.apply_to(format!("({})", icon))
                ));
            }
            MenuItem::Folder { name, items } => {
                output.push_str(&format!(
                    "{}{}\n",
                    indent,
                    styles::FOLDER.apply_to(format!("{}/", name))
                ));
                render_menu_level(items, depth + 1, output);
            }
            MenuItem::Placeholder { label } => {
                output.push_str(&format!("{}{}\n", indent, styles::DIMMED.apply_to(label)));
            }
            MenuItem::Manage { label } => {
                output.push_str(&format!("{}{}\n", indent, styles::DIMMED.apply_to("---")));
                output.push_str(&format!("{}{}\n", indent, label));
            }
        }
    }
}

pub fn render_commands(commands: &[SnippetCommand]) -> String {
    let width = commands.iter().map(|c| c.id.width()).max().unwrap_or(0);
    commands
        .iter()
        .map(|c| {
            format!(
                "{}  {}\n",
                styles::KEY.apply_to(pad_to_width(&c.id, width)),
                c.name
            )
        })
        .collect()
}

pub fn render_config(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn one_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
