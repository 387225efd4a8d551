//! # Template Engine
//!
//! Snippet texts contain numbered placeholders (`{1}`, `{2}`, ...) that are
//! filled from the current selection, one selected line per placeholder.
//!
//! ## Substitution Rules
//!
//! The selection is split into lines, each line is trimmed, and blank lines
//! are dropped. Placeholder `{k}` then receives line `k` (1-based), with one
//! exception: when more than one line is selected, `{2}` receives *every* line
//! from the second onward, joined with single spaces (the "grouped tail").
//! Placeholders without a matching line become empty.
//!
//! ```text
//! template:  "> {1}\n> {2}"
//! selection: "Hello\nworld\ntest"
//! result:    "> Hello\n> world test"
//! ```
//!
//! Substitution is a single pass over the original template. Text inserted
//! for one placeholder is never scanned again, so a selection that itself
//! contains `{2}` ends up in the output verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// True if `text` contains at least one `{n}` placeholder.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// The distinct placeholder indices used in `text`, ascending.
///
/// Tokens whose number does not fit in a `usize` are not reported; they are
/// still replaced (with nothing) by [`process_template`].
pub fn extract_placeholders(text: &str) -> BTreeSet<usize> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Substitute `selection` into the placeholders of `template`.
///
/// An empty selection leaves the template untouched, placeholders included.
pub fn process_template(template: &str, selection: &str) -> String {
    if selection.is_empty() || !has_placeholders(template) {
        return template.to_string();
    }

    let lines = selection_lines(selection);
    let replacements: HashMap<usize, String> = extract_placeholders(template)
        .into_iter()
        .map(|k| (k, replacement_for(k, &lines)))
        .collect();

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|k| replacements.get(&k))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Trimmed, non-empty lines of the selection.
fn selection_lines(selection: &str) -> Vec<&str> {
    selection
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn replacement_for(k: usize, lines: &[&str]) -> String {
    let n = lines.len();
    match k {
        1 => lines.first().map(|line| line.to_string()).unwrap_or_default(),
        2 if n > 1 => lines[1..].join(" "),
        k if k > 1 && k <= n => lines[k - 1].to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_placeholder() {
        assert_eq!(process_template("Hello, {1}!", "John Doe"), "Hello, John Doe!");
    }

    #[test]
    fn two_lines_two_placeholders() {
        assert_eq!(process_template("- {1}\n- {2}", "one\ntwo"), "- one\n- two");
    }

    #[test]
    fn second_placeholder_absorbs_remaining_lines() {
        assert_eq!(
            process_template("> {1}\n> {2}", "Hello\nworld\ntest"),
            "> Hello\n> world test"
        );
    }

    #[test]
    fn grouped_tail_overrides_third_placeholder_source() {
        // {2} takes lines 2..n, {3} still receives line 3 on its own.
        assert_eq!(
            process_template("{1}|{2}|{3}", "a\nb\nc"),
            "a|b c|c"
        );
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        for selection in ["", "x", "one\ntwo\nthree", "{1}"] {
            assert_eq!(process_template("plain text", selection), "plain text");
            assert_eq!(process_template("{a} {} {-1}", selection), "{a} {} {-1}");
        }
    }

    #[test]
    fn empty_selection_keeps_placeholders() {
        assert_eq!(process_template("Hello, {1}!", ""), "Hello, {1}!");
    }

    #[test]
    fn blank_selection_empties_placeholders() {
        assert_eq!(process_template("[{1}][{2}]", "  \n\t\n"), "[][]");
    }

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        assert_eq!(
            process_template("{1}/{2}", "  first  \n\n   \n  second\r\n"),
            "first/second"
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(process_template("{1}-{2}", "a\r\nb\r\nc"), "a-b c");
    }

    #[test]
    fn out_of_range_placeholders_become_empty() {
        assert_eq!(process_template("{1}{4}{0}", "only"), "only");
        assert_eq!(process_template("[{2}]", "only"), "[]");
        assert_eq!(
            process_template("x{99999999999999999999999}y", "line"),
            "xy"
        );
    }

    #[test]
    fn repeated_placeholder_is_replaced_everywhere() {
        assert_eq!(
            process_template("{1} and {1} again, then {2}", "a\nb"),
            "a and a again, then b"
        );
    }

    #[test]
    fn leading_zeros_address_the_same_line() {
        assert_eq!(process_template("{01}:{1}", "x"), "x:x");
    }

    #[test]
    fn inserted_text_is_not_substituted_again() {
        assert_eq!(process_template("{1} {2}", "{2}\nsecond"), "{2} second");
        assert_eq!(process_template("{2} {1}", "{1}\n{2}"), "{2} {1}");
    }

    #[test]
    fn has_placeholders_detects_numeric_tokens_only() {
        assert!(has_placeholders("Hello {1}"));
        assert!(has_placeholders("{0}"));
        assert!(has_placeholders("{123}"));
        assert!(!has_placeholders("Hello {name}"));
        assert!(!has_placeholders("{ 1 }"));
        assert!(!has_placeholders(""));
    }

    #[test]
    fn extract_collapses_duplicates() {
        let found = extract_placeholders("{2} {1} {2} {10} {1}");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![1, 2, 10]);
        assert!(extract_placeholders("no tokens").is_empty());
    }
}
