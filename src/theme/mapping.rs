//! `key=value` mapping files: key translation, alpha prefixes and overrides

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, trace, warn};

use super::defaults::OVERRIDE_FILE_SUFFIX;
use crate::exceptions::{ConvertError, Result};

/// Read lines leniently: invalid UTF-8 is replaced and a trailing `\r` is dropped
pub(crate) fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|bytes| {
            let mut text = String::from_utf8_lossy(&bytes).into_owned();
            if text.ends_with('\r') {
                text.pop();
            }
            text
        })
    })
}

/// Ordered table of rules read from a mapping file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    rules: IndexMap<String, String>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` rules. Whitespace is kept, the last duplicate wins.
    ///
    /// The value is everything after the first `=`, so `c=x=y` maps `c` to `x=y`.
    /// Lines without `=` are skipped.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for (number, line) in read_lines(reader).enumerate() {
            let line = line?;
            match line.split_once('=') {
                Some((key, value)) => table.insert(key, value),
                None => {
                    if !line.is_empty() {
                        debug!("⚠️ Skipping mapping line {} without '=': {line:?}", number + 1);
                    }
                }
            }
        }
        Ok(table)
    }

    /// Load a mapping file; a missing file is reported as an IO error
    pub fn load(path: &Path) -> Result<Self> {
        trace!("📖 Reading mapping file {path:?}");
        let file = File::open(path)?;
        let table = Self::parse(BufReader::new(file))?;
        debug!("✅ Loaded {} rules from {path:?}", table.len());
        Ok(table)
    }

    /// Load a mapping file, treating a missing file as an empty table
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(ConvertError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("📭 No mapping file at {path:?}");
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Insert or replace a rule
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rules.insert(key.into(), value.into());
    }

    /// Look up a rule
    pub fn get(&self, key: &str) -> Option<&str> {
        self.rules.get(key).map(String::as_str)
    }

    /// Look up a rule, ignoring empty values
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Remove a rule, keeping the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.rules.shift_remove(key)
    }

    /// Merge `other` over `self`; rules from `other` win
    pub fn extend(&mut self, other: MappingTable) {
        self.rules.extend(other.rules);
    }

    /// Iterate rules in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl IntoIterator for MappingTable {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Load the mobile-key → desktop-key table. Without it nothing would be written.
pub fn load_translation(path: &Path) -> Result<MappingTable> {
    match MappingTable::load(path) {
        Err(ConvertError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
            Err(ConvertError::MissingTranslation(path.to_path_buf()))
        }
        other => other,
    }
}

/// Load the mobile-key → alpha byte table; missing file means every key is opaque
pub fn load_alpha(path: &Path) -> Result<MappingTable> {
    if !path.exists() {
        warn!("⚠️ Alpha prefix map {path:?} not found, translated colors keep their own alpha");
    }
    MappingTable::load_or_empty(path)
}

/// File names tried for a theme stem, from broadest to most specific.
///
/// `night.blue.v2` yields `night.map`, `night.blue.map`, `night.blue.v2.map`.
pub fn override_file_names(stem: &str) -> Vec<String> {
    let mut prefix = String::new();
    stem.split('.')
        .map(|part| {
            prefix.push_str(part);
            prefix.push('.');
            format!("{prefix}{OVERRIDE_FILE_SUFFIX}")
        })
        .collect()
}

/// Load the override cascade for a theme stem from `dir`.
///
/// More specific files override broader ones. Values may carry a leading `#`,
/// which is dropped; rules left empty are ignored. Every file name tried is
/// reported on `progress`.
pub fn load_overrides<W: Write>(dir: &Path, stem: &str, progress: &mut W) -> Result<MappingTable> {
    let mut overrides = MappingTable::new();
    for name in override_file_names(stem) {
        writeln!(progress, "Looking for overrides at {name}")?;
        let layer = MappingTable::load_or_empty(&dir.join(&name))?;
        if !layer.is_empty() {
            debug!("🎯 {} overrides from {name}", layer.len());
        }
        for (key, value) in layer {
            let value = value.strip_prefix('#').unwrap_or(&value);
            if value.is_empty() {
                trace!("Ignoring empty override for {key}");
                continue;
            }
            overrides.insert(key, value);
        }
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_keeps_whitespace_and_last_wins() {
        let table = MappingTable::parse("a=1\n b = 2\nnoequals\n\na=3\nc=x=y\n".as_bytes()).unwrap();
        assert_eq!(table.get("a"), Some("3"));
        assert_eq!(table.get(" b "), Some(" 2"));
        assert_eq!(table.get("c"), Some("x=y"));
        assert_eq!(table.get("noequals"), None);
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", " b ", "c"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let table = MappingTable::parse("chat_bg=bg\r\ntext=fg\r\n".as_bytes()).unwrap();
        assert_eq!(table.get("chat_bg"), Some("bg"));
        assert_eq!(table.get("text"), Some("fg"));
    }

    #[test]
    fn test_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("trans.map");

        assert!(load_alpha(&missing).unwrap().is_empty());
        assert!(matches!(
            load_translation(&missing),
            Err(ConvertError::MissingTranslation(_))
        ));
    }

    #[test]
    fn test_override_file_names() {
        assert_eq!(
            override_file_names("night.blue.v2"),
            vec!["night.map", "night.blue.map", "night.blue.v2.map"]
        );
        assert_eq!(override_file_names("plain"), vec!["plain.map"]);
    }

    #[test]
    fn test_override_cascade_specific_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("night.map"), "k=#111111\nshared=222222\n").unwrap();
        fs::write(dir.join("night.blue.map"), "shared=#33333344\nempty=#\n").unwrap();

        let mut progress = Vec::new();
        let overrides = load_overrides(dir, "night.blue", &mut progress).unwrap();
        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "Looking for overrides at night.map\nLooking for overrides at night.blue.map\n"
        );
        assert_eq!(overrides.get("k"), Some("111111"));
        assert_eq!(overrides.get("shared"), Some("33333344"));
        assert_eq!(overrides.get("empty"), None);
        assert_eq!(overrides.len(), 2);
    }
}
