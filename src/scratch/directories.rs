//! Creation of the extraction and output directories

use crate::exceptions::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// The two process-wide directories used by a conversion run
#[derive(Debug, Clone)]
pub struct ScratchDirectories {
    /// Extracted archives and converted wallpapers, kept between runs
    wip_dir: PathBuf,
    /// Generated `.attheme` files
    output_dir: PathBuf,
}

impl ScratchDirectories {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(wip_dir: P, output_dir: Q) -> Self {
        Self {
            wip_dir: wip_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Create both directories; existing ones are left untouched
    pub fn prepare(&self) -> Result<()> {
        for dir in [&self.wip_dir, &self.output_dir] {
            debug!("📁 Preparing directory: {:?}", dir);
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn wip_dir(&self) -> &Path {
        &self.wip_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths of one theme inside these directories
    pub fn theme_paths(&self, archive_path: &Path) -> super::ThemePaths {
        super::ThemePaths::new(&self.wip_dir, &self.output_dir, archive_path)
    }
}
