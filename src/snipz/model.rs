use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Icon used when a snippet is created without one and no other default is configured.
pub const DEFAULT_ICON: &str = "pencil";

/// The attributes stored for one snippet key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub text: String,
    pub icon: String,
    /// Empty means ungrouped.
    pub group: String,
}

impl SnippetRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: DEFAULT_ICON.to_string(),
            group: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn is_grouped(&self) -> bool {
        !self.group.is_empty()
    }
}

/// A record paired with its key, as handed out by listing operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub key: String,
    #[serde(flatten)]
    pub record: SnippetRecord,
}

impl Snippet {
    pub fn new(key: impl Into<String>, record: SnippetRecord) -> Self {
        Self {
            key: key.into(),
            record,
        }
    }
}

/// On-disk shape of a snippet set.
///
/// The three maps are keyed identically and iterate in repository order.
/// `icons` and `groups` are optional on read so that files written before
/// those attributes existed still load; they are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub snippets: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<IndexMap<String, String>>,
}

impl StoredState {
    /// Flatten ordered records into the three parallel maps.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a SnippetRecord)>,
    {
        let mut snippets = IndexMap::new();
        let mut icons = IndexMap::new();
        let mut groups = IndexMap::new();
        for (key, record) in entries {
            snippets.insert(key.clone(), record.text.clone());
            icons.insert(key.clone(), record.icon.clone());
            groups.insert(key.clone(), record.group.clone());
        }
        Self {
            snippets,
            icons: Some(icons),
            groups: Some(groups),
        }
    }

    /// Rebuild ordered records, backfilling missing attributes and dropping
    /// attribute entries that have no snippet.
    ///
    /// Returns the records and whether anything had to be repaired, in which
    /// case the caller should persist the result.
    pub fn into_entries(self, default_icon: &str) -> (IndexMap<String, SnippetRecord>, bool) {
        let StoredState {
            snippets,
            icons,
            groups,
        } = self;

        let mut repaired = icons.is_none() || groups.is_none();
        let mut icons = icons.unwrap_or_default();
        let mut groups = groups.unwrap_or_default();

        let mut entries = IndexMap::with_capacity(snippets.len());
        for (key, text) in snippets {
            let icon = match icons.swap_remove(&key) {
                Some(icon) => icon,
                None => {
                    repaired = true;
                    default_icon.to_string()
                }
            };
            let group = match groups.swap_remove(&key) {
                Some(group) => group,
                None => {
                    repaired = true;
                    String::new()
                }
            };
            entries.insert(key, SnippetRecord { text, icon, group });
        }

        // Whatever is left belongs to no snippet.
        if !icons.is_empty() || !groups.is_empty() {
            repaired = true;
        }

        (entries, repaired)
    }
}
