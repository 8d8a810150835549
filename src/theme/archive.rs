//! Theme archive extraction
//!
//! A `.tdesktop-theme` file is a plain ZIP archive. Every entry is unpacked
//! into the theme's scratch directory; the reader and writer of an entry are
//! closed before the next entry is opened.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use log::{debug, trace, warn};
use zip::ZipArchive;

use crate::exceptions::Result;

/// Extract a theme archive into `dest_dir`, returning the number of files written
pub fn extract_theme(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
    debug!("📦 Extracting {archive_path:?} to {dest_dir:?}");
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    fs::create_dir_all(dest_dir)?;

    let mut files = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("⚠️ Skipping archive entry with unsafe path: {:?}", entry.name());
            continue;
        };
        let dest_path = dest_dir.join(relative);
        let mode = entry.unix_mode();

        if entry.is_dir() {
            trace!("📁 Creating directory {dest_path:?}");
            fs::create_dir_all(&dest_path)?;
        } else {
            trace!("📄 Extracting {:?} ({} bytes)", entry.name(), entry.size());
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&dest_path)?;
            io::copy(&mut entry, &mut out)?;
            files += 1;
        }

        apply_mode(&dest_path, mode);
    }

    debug!("✅ Extracted {files} files from {archive_path:?}");
    Ok(files)
}

/// Apply the Unix mode stored in the archive, if any
#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return;
    };
    let permissions = fs::Permissions::from_mode(mode & 0o7777);
    if let Err(e) = fs::set_permissions(path, permissions) {
        debug!("⚠️ Could not set mode {:o} on {path:?}: {e}", mode & 0o7777);
    }
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::ConvertError;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default().unix_permissions(0o640);
        for (name, data) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, options.unix_permissions(0o755))
                    .unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extracts_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("night.tdesktop-theme");
        write_archive(
            &archive,
            &[
                ("colors.tdesktop-theme", b"bg: #112233;\n"),
                ("extra/", b""),
                ("extra/notes.txt", b"hello"),
            ],
        );

        let dest = temp_dir.path().join("wip/night");
        let files = extract_theme(&archive, &dest).unwrap();

        assert_eq!(files, 2);
        assert_eq!(
            fs::read_to_string(dest.join("colors.tdesktop-theme")).unwrap(),
            "bg: #112233;\n"
        );
        assert!(dest.join("extra").is_dir());
        assert_eq!(fs::read(dest.join("extra/notes.txt")).unwrap(), b"hello");
    }

    #[test]
    fn test_existing_files_are_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("night.tdesktop-theme");
        write_archive(&archive, &[("colors.tdesktop-theme", b"short")]);

        let dest = temp_dir.path().join("wip/night");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("colors.tdesktop-theme"), "a much longer previous manifest").unwrap();

        extract_theme(&archive, &dest).unwrap();
        assert_eq!(
            fs::read_to_string(dest.join("colors.tdesktop-theme")).unwrap(),
            "short"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_archive_mode_is_applied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("night.tdesktop-theme");
        write_archive(&archive, &[("colors.tdesktop-theme", b"bg: #112233;")]);

        let dest = temp_dir.path().join("out");
        extract_theme(&archive, &dest).unwrap();
        let mode = fs::metadata(dest.join("colors.tdesktop-theme"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_not_a_zip() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("broken.tdesktop-theme");
        fs::write(&archive, b"definitely not a zip archive").unwrap();

        let result = extract_theme(&archive, &temp_dir.path().join("out"));
        assert!(matches!(result, Err(ConvertError::Archive(_))));
    }
}
