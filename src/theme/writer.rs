//! `.attheme` file emission

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{debug, trace};

use super::attheme::MobileTheme;
use super::defaults::{WALLPAPER_CHUNK_SIZE, WALLPAPER_END_MARKER, WALLPAPER_START_MARKER};
use crate::exceptions::Result;

/// Write the theme colors and, when the theme has no wallpaper color, the
/// `WPS\n` / `\nWPE` block holding the JPEG read from `wallpaper`.
///
/// Returns whether the wallpaper block was written.
pub fn write_theme<W: Write, R: Read>(
    out: &mut W,
    theme: &MobileTheme,
    wallpaper: Option<R>,
) -> Result<bool> {
    out.write_all(theme.color_lines().as_bytes())?;

    let Some(mut wallpaper) = wallpaper.filter(|_| theme.needs_wallpaper()) else {
        return Ok(false);
    };

    out.write_all(WALLPAPER_START_MARKER)?;
    let mut buffer = [0u8; WALLPAPER_CHUNK_SIZE];
    let mut copied = 0usize;
    loop {
        let n = wallpaper.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        out.write_all(&buffer[..n])?;
        copied += n;
    }
    out.write_all(WALLPAPER_END_MARKER)?;
    trace!("📎 Embedded {copied} wallpaper bytes");
    Ok(true)
}

/// Write `theme` to `output`, embedding the JPEG at `wallpaper_path` if needed
pub fn write_attheme(output: &Path, theme: &MobileTheme, wallpaper_path: &Path) -> Result<bool> {
    let wallpaper = if theme.needs_wallpaper() {
        Some(File::open(wallpaper_path)?)
    } else {
        None
    };

    debug!("📝 Writing {} colors to {output:?}", theme.len());
    let mut out = BufWriter::new(File::create(output)?);
    let embedded = write_theme(&mut out, theme, wallpaper)?;
    out.flush()?;
    Ok(embedded)
}
