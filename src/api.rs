//! High-level API for theme conversion

use crate::exceptions::{ConvertError, Result};
use crate::scratch::ScratchDirectories;
use crate::theme::ConvertedTheme;
use crate::theme::ThemeConverter;
use crate::theme::defaults::{
    DEFAULT_OUTPUT_DIR, DEFAULT_WIP_DIR, THEME_ARCHIVE_PATTERN, THEME_MAP_FILE, TRANS_MAP_FILE,
};
use crate::theme::mapping::{load_alpha, load_translation};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Printed once every theme has been converted
pub const FOOTER: &str = "
Converting done.
If you have any bugs feel free to open an issue with the theme attached.";

/// Options for a conversion run
#[derive(Debug, Default)]
pub struct ConvertOptions {
    /// Directory holding the archives, maps and overrides (defaults to CWD)
    pub source_dir: Option<PathBuf>,
    /// Extraction directory (defaults to `<source>/wip`)
    pub wip_dir: Option<PathBuf>,
    /// Output directory (defaults to `<source>/atthemes`)
    pub output_dir: Option<PathBuf>,
    /// Key translation map (defaults to `<source>/theme.map`)
    pub theme_map: Option<PathBuf>,
    /// Alpha prefix map (defaults to `<source>/trans.map`)
    pub trans_map: Option<PathBuf>,
}

impl ConvertOptions {
    fn source_dir(&self) -> PathBuf {
        self.source_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    fn scratch(&self) -> ScratchDirectories {
        let source = self.source_dir();
        ScratchDirectories::new(
            self.wip_dir
                .clone()
                .unwrap_or_else(|| source.join(DEFAULT_WIP_DIR)),
            self.output_dir
                .clone()
                .unwrap_or_else(|| source.join(DEFAULT_OUTPUT_DIR)),
        )
    }
}

/// Result of a conversion run
#[derive(Debug, Default, Serialize)]
pub struct ConversionSummary {
    pub themes: Vec<ConvertedTheme>,
}

/// Theme archives in `dir`, sorted by file name. Symlinks to files count as files.
pub fn discover_themes(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = glob::Pattern::new(THEME_ARCHIVE_PATTERN)
        .map_err(|e| ConvertError::Generic(format!("Invalid theme pattern: {e}")))?;

    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if pattern.matches(&entry.file_name().to_string_lossy()) && path.is_file() {
            archives.push(path);
        }
    }
    archives.sort();
    debug!("🔍 Found {} theme archives in {dir:?}", archives.len());
    Ok(archives)
}

/// Convert every `.tdesktop-theme` archive of the source directory.
///
/// The first fatal error aborts the whole run.
pub fn convert_all(options: &ConvertOptions) -> Result<ConversionSummary> {
    let source = options.source_dir();
    let dirs = options.scratch();
    dirs.prepare()?;

    let archives = discover_themes(&source)?;
    let mut summary = ConversionSummary::default();
    if archives.is_empty() {
        info!("📭 No theme archives in {source:?}");
        return Ok(summary);
    }

    let translation = load_translation(
        &options
            .theme_map
            .clone()
            .unwrap_or_else(|| source.join(THEME_MAP_FILE)),
    )?;
    let alpha = load_alpha(
        &options
            .trans_map
            .clone()
            .unwrap_or_else(|| source.join(TRANS_MAP_FILE)),
    )?;
    info!(
        "🗺️ {} key translations, {} alpha prefixes",
        translation.len(),
        alpha.len()
    );

    let converter = ThemeConverter::new(&source, translation, alpha, dirs);
    for archive in archives {
        summary.themes.push(converter.convert(&archive)?);
    }
    Ok(summary)
}
