//! Per-theme path management

use crate::theme::defaults::{
    ATTHEME_EXTENSION, CONVERTED_WALLPAPER_FILE, MANIFEST_FILE, THEME_ARCHIVE_SUFFIX,
};
use std::path::{Path, PathBuf};

/// Where one theme is extracted, converted and written
#[derive(Debug, Clone)]
pub struct ThemePaths {
    wip_dir: PathBuf,
    output_dir: PathBuf,
    stem: String,
}

impl ThemePaths {
    /// Derive the theme stem from the archive file name
    pub fn new(wip_dir: &Path, output_dir: &Path, archive_path: &Path) -> Self {
        let stem = archive_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .map(|n| {
                n.strip_suffix(THEME_ARCHIVE_SUFFIX)
                    .unwrap_or(&n)
                    .to_string()
            })
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            wip_dir: wip_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            stem,
        }
    }

    /// Theme name without the `.tdesktop-theme` suffix
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// `wip/<stem>`
    pub fn extract_dir(&self) -> PathBuf {
        self.wip_dir.join(&self.stem)
    }

    /// `wip/<stem>/colors.tdesktop-theme`
    pub fn manifest(&self) -> PathBuf {
        self.extract_dir().join(MANIFEST_FILE)
    }

    /// `wip/<stem>/converted.jpg`
    pub fn converted_wallpaper(&self) -> PathBuf {
        self.extract_dir().join(CONVERTED_WALLPAPER_FILE)
    }

    /// `atthemes/<stem>.attheme`
    pub fn output(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.stem, ATTHEME_EXTENSION))
    }
}
