//! `.pls` playlist parsing
//!
//! `.pls` files are INI-style documents. The entries live in a `[playlist]`
//! section as `File1..FileN` keys, bounded by a `NumberOfEntries` count.
//! Section and key lookup is case-sensitive; a missing section, key, or
//! count yields zero entries rather than an error.

use std::collections::HashMap;

/// Section holding the playlist entries
pub const PLAYLIST_SECTION: &str = "playlist";

/// Key declaring how many `FileN` entries are present
pub const ENTRY_COUNT_KEY: &str = "NumberOfEntries";

/// A parsed INI-style document
#[derive(Debug, Default)]
pub struct IniDocument {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniDocument {
    /// Parse an INI document, tolerating blank lines and `;`/`#` comments
    ///
    /// `key=value` lines outside any `[section]` are dropped.
    pub fn parse(input: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
            } else if let Some((key, value)) = line.split_once('=') {
                if let Some(section) = &current {
                    sections
                        .entry(section.clone())
                        .or_default()
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
            }
        }

        Self { sections }
    }

    /// Look up a value, case-sensitively
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }
}

/// Extract the playlist entry URLs from a `.pls` document, in order
///
/// Reads `NumberOfEntries` under `[playlist]`, then `File1..FileN`,
/// skipping blank values and ignoring entries beyond the declared count.
pub fn playlist_entries(input: &str) -> Vec<String> {
    let doc = IniDocument::parse(input);

    let count = doc
        .get(PLAYLIST_SECTION, ENTRY_COUNT_KEY)
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);

    (1..=count)
        .filter_map(|i| doc.get(PLAYLIST_SECTION, &format!("File{i}")))
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
