//! # Menu Organization
//!
//! Snippets are offered in a menu: ungrouped snippets first, unlabeled, then
//! one folder per group label in alphabetical order, then an entry for
//! managing snippets. [`organize`] does the partitioning and [`build_menu`]
//! turns a snippet list into the items a renderer walks.
//!
//! Order inside each bucket is repository order, so reordering snippets
//! reorders the menu.

use crate::model::Snippet;
use indexmap::IndexMap;
use serde::Serialize;

/// Keys partitioned by group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuLayout {
    pub ungrouped: Vec<String>,
    /// Groups in order of first appearance.
    pub groups: IndexMap<String, Vec<String>>,
}

impl MenuLayout {
    /// Groups sorted by name, for display.
    pub fn sorted_groups(&self) -> Vec<(&str, &[String])> {
        let mut groups: Vec<(&str, &[String])> = self
            .groups
            .iter()
            .map(|(name, keys)| (name.as_str(), keys.as_slice()))
            .collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.ungrouped.is_empty() && self.groups.is_empty()
    }
}

/// Partition `ordered_keys` by the group `group_of` reports for each key.
///
/// An empty group means ungrouped. Every bucket keeps the relative order of
/// `ordered_keys`.
pub fn organize<K, F, G>(ordered_keys: &[K], mut group_of: F) -> MenuLayout
where
    K: AsRef<str>,
    F: FnMut(&str) -> G,
    G: AsRef<str>,
{
    let mut layout = MenuLayout::default();
    for key in ordered_keys {
        let key = key.as_ref();
        let group = group_of(key);
        let group = group.as_ref();
        if group.is_empty() {
            layout.ungrouped.push(key.to_string());
        } else {
            layout
                .groups
                .entry(group.to_string())
                .or_default()
                .push(key.to_string());
        }
    }
    layout
}

pub const MANAGE_LABEL: &str = "Manage snippets";
pub const EMPTY_LABEL: &str = "No snippets yet";

/// One renderable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuItem {
    Snippet { key: String, icon: String },
    Folder { name: String, items: Vec<MenuItem> },
    /// Shown, but not selectable.
    Placeholder { label: String },
    Manage { label: String },
}

impl MenuItem {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, MenuItem::Placeholder { .. })
    }
}

/// Menu items for `snippets`, given in repository order.
pub fn build_menu(snippets: &[Snippet]) -> Vec<MenuItem> {
    let mut items = Vec::new();

    if snippets.is_empty() {
        items.push(MenuItem::Placeholder {
            label: EMPTY_LABEL.to_string(),
        });
    } else {
        let icons: IndexMap<&str, &str> = snippets
            .iter()
            .map(|s| (s.key.as_str(), s.record.icon.as_str()))
            .collect();
        let groups: IndexMap<&str, &str> = snippets
            .iter()
            .map(|s| (s.key.as_str(), s.record.group.as_str()))
            .collect();
        let keys: Vec<&str> = snippets.iter().map(|s| s.key.as_str()).collect();

        let layout = organize(&keys, |key| groups.get(key).copied().unwrap_or_default());
        let entry = |key: &String| MenuItem::Snippet {
            key: key.clone(),
            icon: icons.get(key.as_str()).copied().unwrap_or_default().to_string(),
        };

        items.extend(layout.ungrouped.iter().map(entry));
        for (name, keys) in layout.sorted_groups() {
            items.push(MenuItem::Folder {
                name: name.to_string(),
                items: keys.iter().map(entry).collect(),
            });
        }
    }

    items.push(MenuItem::Manage {
        label: MANAGE_LABEL.to_string(),
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetRecord;
    use std::collections::HashMap;

    fn snippet(key: &str, group: &str) -> Snippet {
        Snippet::new(key, SnippetRecord::new(key).with_group(group))
    }

    #[test]
    fn organize_partitions_by_group() {
        let groups: HashMap<&str, &str> = [("a", ""), ("b", "G"), ("c", "")].into_iter().collect();
        let layout = organize(&["a", "b", "c"], |k| groups[k]);

        assert_eq!(layout.ungrouped, vec!["a", "c"]);
        assert_eq!(layout.groups.len(), 1);
        assert_eq!(layout.groups["G"], vec!["b"]);
    }

    #[test]
    fn organize_keeps_relative_order_within_groups() {
        let keys = ["x1", "y1", "x2", "u", "y2", "x3"];
        let layout = organize(&keys, |k| {
            if k.starts_with('x') {
                "X".to_string()
            } else if k.starts_with('y') {
                "Y".to_string()
            } else {
                String::new()
            }
        });

        assert_eq!(layout.ungrouped, vec!["u"]);
        assert_eq!(layout.groups["X"], vec!["x1", "x2", "x3"]);
        assert_eq!(layout.groups["Y"], vec!["y1", "y2"]);
    }

    #[test]
    fn sorted_groups_are_alphabetical() {
        let groups: HashMap<&str, &str> =
            [("a", "zeta"), ("b", "Alpha"), ("c", "mid")].into_iter().collect();
        let layout = organize(&["a", "b", "c"], |k| groups[k]);

        let names: Vec<_> = layout.sorted_groups().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Alpha", "mid", "zeta"]);
        // first-appearance order is kept on the layout itself
        let raw: Vec<_> = layout.groups.keys().map(String::as_str).collect();
        assert_eq!(raw, vec!["zeta", "Alpha", "mid"]);
    }

    #[test]
    fn organize_empty() {
        let keys: [&str; 0] = [];
        let layout = organize(&keys, |_| "");
        assert!(layout.is_empty());
    }

    #[test]
    fn menu_lists_ungrouped_then_sorted_folders_then_manage() {
        let snippets = vec![
            snippet("quote", ""),
            snippet("todo", "work"),
            snippet("greet", "chat"),
            snippet("list", ""),
            snippet("meeting", "work"),
        ];
        let menu = build_menu(&snippets);

        let expected = vec![
            MenuItem::Snippet {
                key: "quote".into(),
                icon: "pencil".into(),
            },
            MenuItem::Snippet {
                key: "list".into(),
                icon: "pencil".into(),
            },
            MenuItem::Folder {
                name: "chat".into(),
                items: vec![MenuItem::Snippet {
                    key: "greet".into(),
                    icon: "pencil".into(),
                }],
            },
            MenuItem::Folder {
                name: "work".into(),
                items: vec![
                    MenuItem::Snippet {
                        key: "todo".into(),
                        icon: "pencil".into(),
                    },
                    MenuItem::Snippet {
                        key: "meeting".into(),
                        icon: "pencil".into(),
                    },
                ],
            },
            MenuItem::Manage {
                label: MANAGE_LABEL.into(),
            },
        ];
        assert_eq!(menu, expected);
    }

    #[test]
    fn empty_menu_has_disabled_placeholder() {
        let menu = build_menu(&[]);
        assert_eq!(menu.len(), 2);
        assert!(!menu[0].is_enabled());
        assert!(matches!(menu[0], MenuItem::Placeholder { .. }));
        assert!(matches!(menu[1], MenuItem::Manage { .. }));
        assert!(menu[1].is_enabled());
    }

    #[test]
    fn menu_carries_icons() {
        let snippets = vec![Snippet::new("s", SnippetRecord::new("t").with_icon("star"))];
        let menu = build_menu(&snippets);
        assert_eq!(
            menu[0],
            MenuItem::Snippet {
                key: "s".into(),
                icon: "star".into()
            }
        );
    }
}
