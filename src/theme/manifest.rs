//! Desktop theme manifest (`colors.tdesktop-theme`) parsing
//!
//! The manifest is a list of `key: value;` rules where `value` is either a
//! `#RRGGBB` / `#RRGGBBAA` literal or the name of another key. Aliases are
//! resolved in a single pass against the rules read so far, so a reference
//! to a key defined further down resolves to an empty color.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use super::defaults::{ALIAS_SENTINEL_COLOR, ALIAS_SENTINEL_KEY};
use super::mapping::read_lines;
use crate::exceptions::{ConvertError, Result};

/// Desktop key → leaf hex color (without `#`)
#[derive(Debug, Clone, Default)]
pub struct DesktopPalette {
    colors: HashMap<String, String>,
}

impl DesktopPalette {
    /// Parse manifest rules from a reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut colors: HashMap<String, String> = HashMap::new();

        for line in read_lines(reader) {
            let line = line?;
            let mut parts = line.split(": ");
            let (Some(key), Some(rest)) = (parts.next(), parts.next()) else {
                continue;
            };
            let value = rest.split(';').next().unwrap_or_default();

            let resolved = match value.strip_prefix('#') {
                Some(literal) => literal.to_string(),
                None => {
                    let target = colors.get(value).cloned().unwrap_or_default();
                    if target.is_empty() {
                        trace!("Alias {key} -> {value} is unresolved at this point");
                    }
                    target
                }
            };
            colors.insert(key.to_string(), resolved);
        }

        colors.insert(
            ALIAS_SENTINEL_KEY.to_string(),
            ALIAS_SENTINEL_COLOR.to_string(),
        );
        Ok(Self { colors })
    }

    /// Load the manifest file of an extracted theme
    pub fn load(path: &Path) -> Result<Self> {
        debug!("📖 Reading theme manifest {path:?}");
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConvertError::MissingManifest(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        let palette = Self::parse(BufReader::new(file))?;
        debug!("✅ Manifest defines {} colors", palette.len());
        Ok(palette)
    }

    /// Resolved color for a desktop key, empty when the key never resolved
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn palette(text: &str) -> DesktopPalette {
        DesktopPalette::parse(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_literals_and_aliases() {
        let palette = palette(
            "// Night theme\n\nbase: #010203;\naccent: base;\nfg: #aabbccdd; // text\nbroken line\n",
        );
        assert_eq!(palette.resolve("base"), Some("010203"));
        assert_eq!(palette.resolve("accent"), Some("010203"));
        assert_eq!(palette.resolve("fg"), Some("aabbccdd"));
        assert_eq!(palette.resolve("broken line"), None);
    }

    #[test]
    fn test_forward_alias_is_empty() {
        let palette = palette("early: late;\nlate: #ffffff;\n");
        assert_eq!(palette.resolve("early"), Some(""));
        assert_eq!(palette.resolve("late"), Some("ffffff"));
    }

    #[test]
    fn test_sentinel_always_present() {
        let palette = palette("");
        assert_eq!(palette.resolve("whatever"), Some("ff00ff"));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_missing_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let result = DesktopPalette::load(&temp_dir.path().join("colors.tdesktop-theme"));
        assert!(matches!(result, Err(ConvertError::MissingManifest(_))));
    }
}
