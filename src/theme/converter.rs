//! Conversion of a single theme archive

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use super::archive::extract_theme;
use super::attheme::MobileTheme;
use super::background::{BackgroundAsset, convert_background};
use super::manifest::DesktopPalette;
use super::mapping::{MappingTable, load_overrides};
use super::writer::write_attheme;
use crate::exceptions::Result;
use crate::scratch::ScratchDirectories;

/// Outcome of converting one theme
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedTheme {
    pub stem: String,
    pub output: PathBuf,
    pub colors: usize,
    pub wallpaper_embedded: bool,
    pub background_found: bool,
}

/// Shared state for converting the themes of one run
#[derive(Debug)]
pub struct ThemeConverter {
    /// Directory holding the override files
    override_dir: PathBuf,
    translation: MappingTable,
    alpha: MappingTable,
    dirs: ScratchDirectories,
}

impl ThemeConverter {
    pub fn new(
        override_dir: &Path,
        translation: MappingTable,
        alpha: MappingTable,
        dirs: ScratchDirectories,
    ) -> Self {
        Self {
            override_dir: override_dir.to_path_buf(),
            translation,
            alpha,
            dirs,
        }
    }

    /// Extract, translate and write one `.tdesktop-theme` archive, reporting progress on stdout
    pub fn convert(&self, archive_path: &Path) -> Result<ConvertedTheme> {
        self.convert_with_progress(archive_path, &mut io::stdout().lock())
    }

    /// Like [`ThemeConverter::convert`], writing the progress lines to `progress`.
    ///
    /// The background is only composed when the theme has no wallpaper color.
    pub fn convert_with_progress<W: Write>(
        &self,
        archive_path: &Path,
        progress: &mut W,
    ) -> Result<ConvertedTheme> {
        let paths = self.dirs.theme_paths(archive_path);
        writeln!(progress, "\nConverting {}", paths.stem())?;
        info!("🎨 Converting {archive_path:?}");

        extract_theme(archive_path, &paths.extract_dir())?;
        let palette = DesktopPalette::load(&paths.manifest())?;
        let overrides = load_overrides(&self.override_dir, paths.stem(), progress)?;
        debug!(
            "📊 {} desktop colors, {} overrides",
            palette.len(),
            overrides.len()
        );

        let theme = MobileTheme::translate(&self.translation, &palette, &self.alpha, overrides);
        for key in theme.missing_keys() {
            writeln!(progress, "Key {key} missing from .tdesktop-theme")?;
        }

        let wallpaper = paths.converted_wallpaper();
        let background_found = if theme.needs_wallpaper() {
            convert_background(&paths.extract_dir(), &wallpaper)?.is_some()
        } else {
            debug!("🎨 Wallpaper is a color, skipping background composition");
            BackgroundAsset::locate(&paths.extract_dir()).is_some()
        };

        let output = paths.output();
        let wallpaper_embedded = write_attheme(&output, &theme, &wallpaper)?;
        info!("✅ Wrote {output:?} ({} colors)", theme.len());

        Ok(ConvertedTheme {
            stem: paths.stem().to_string(),
            output,
            colors: theme.len(),
            wallpaper_embedded,
            background_found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::{self, File};
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, data) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    fn converter(dir: &Path, translation: &str) -> ThemeConverter {
        let dirs = ScratchDirectories::new(dir.join("wip"), dir.join("atthemes"));
        dirs.prepare().unwrap();
        ThemeConverter::new(
            dir,
            MappingTable::parse(translation.as_bytes()).unwrap(),
            MappingTable::new(),
            dirs,
        )
    }

    #[test]
    fn test_progress_lines() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let archive = dir.join("night.blue.tdesktop-theme");
        write_archive(&archive, &[("colors.tdesktop-theme", b"bg: #112233;\n")]);

        let mut progress = Vec::new();
        converter(dir, "chat_wallpaper=bg\nk=nosuch\n")
            .convert_with_progress(&archive, &mut progress)
            .unwrap();

        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "\nConverting night.blue\n\
             Looking for overrides at night.map\n\
             Looking for overrides at night.blue.map\n\
             Key nosuch missing from .tdesktop-theme\n"
        );
    }

    #[test]
    fn test_wallpaper_color_skips_background_decoding() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let archive = dir.join("day.tdesktop-theme");
        write_archive(
            &archive,
            &[
                ("colors.tdesktop-theme", b"bg: #102030;\n"),
                ("background.jpg", b"not really a jpeg"),
            ],
        );

        let converted = converter(dir, "chat_wallpaper=bg\n")
            .convert_with_progress(&archive, &mut io::sink())
            .unwrap();

        assert!(converted.background_found);
        assert!(!converted.wallpaper_embedded);
        assert!(!dir.join("wip/day/converted.jpg").exists());
        assert_eq!(
            fs::read_to_string(dir.join("atthemes/day.attheme")).unwrap(),
            "chat_wallpaper=#102030\n"
        );
    }
}
