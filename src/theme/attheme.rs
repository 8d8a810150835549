//! In-memory mobile theme built from the desktop palette and mapping tables

use indexmap::IndexMap;
use log::{debug, warn};

use super::color::{compose_override, compose_translated};
use super::defaults::{MISSING_KEY_COLOR, WALLPAPER_KEY};
use super::manifest::DesktopPalette;
use super::mapping::MappingTable;

/// Ordered mobile key → color entries of an `.attheme` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileTheme {
    entries: IndexMap<String, String>,
    /// Desktop keys that did not resolve to a color, in translation order
    missing: Vec<String>,
}

impl MobileTheme {
    /// Translate a desktop palette into mobile entries.
    ///
    /// Overrides win over the palette and are consumed as they are used; the
    /// remaining ones are appended for keys the translation table does not know.
    /// Translated colors are uppercased, override-only colors are kept as written.
    pub fn translate(
        translation: &MappingTable,
        palette: &DesktopPalette,
        alpha: &MappingTable,
        mut overrides: MappingTable,
    ) -> Self {
        let mut entries = IndexMap::with_capacity(translation.len() + overrides.len());
        let mut missing = Vec::new();

        for (mobile_key, desktop_key) in translation.iter() {
            let value = match overrides.remove(mobile_key).filter(|v| !v.is_empty()) {
                Some(value) => {
                    debug!("🎯 Override for {mobile_key}: {value}");
                    value
                }
                None => palette.resolve(desktop_key).unwrap_or_default().to_string(),
            };

            let color = match compose_translated(&value, alpha.get_non_empty(mobile_key)) {
                Some(color) => color,
                None => {
                    debug!("⚠️ {mobile_key}: desktop key {desktop_key} has no color");
                    missing.push(desktop_key.to_string());
                    MISSING_KEY_COLOR.to_string()
                }
            };
            entries.insert(mobile_key.to_string(), color.to_uppercase());
        }

        for (mobile_key, value) in overrides {
            let color = match compose_override(&value, alpha.get_non_empty(&mobile_key)) {
                Some(color) => color,
                None => {
                    warn!("⚠️ Override {mobile_key}={value} is not a 6 or 8 digit color");
                    MISSING_KEY_COLOR.to_string()
                }
            };
            entries.insert(mobile_key, color);
        }

        Self { entries, missing }
    }

    /// Desktop keys reported as missing while translating
    pub fn missing_keys(&self) -> &[String] {
        &self.missing
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A wallpaper image is embedded unless `chat_wallpaper` is bound to a color
    pub fn needs_wallpaper(&self) -> bool {
        self.get(WALLPAPER_KEY).is_none_or(str::is_empty)
    }

    /// The `KEY=#VALUE` lines of the theme, newline terminated
    pub fn color_lines(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}=#{value}\n"))
            .collect()
    }
}
