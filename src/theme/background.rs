//! Background wallpaper composition
//!
//! Desktop themes ship either a full-size `background.*` image or a small
//! `tiled.*` image. The mobile format has no tile primitive, so tiles are
//! repeated onto a fixed canvas before the result is re-encoded as JPEG.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage, imageops};
use log::{debug, trace, warn};

use super::defaults::{
    BACKGROUND_JPEG, BACKGROUND_PNG, TILED_JPEG, TILED_PNG, WALLPAPER_HEIGHT,
    WALLPAPER_JPEG_QUALITY, WALLPAPER_WIDTH,
};
use crate::exceptions::{ConvertError, Result};

/// Pixel encoding of a background asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelEncoding {
    Jpeg,
    Png,
}

impl PixelEncoding {
    fn image_format(self) -> ImageFormat {
        match self {
            PixelEncoding::Jpeg => ImageFormat::Jpeg,
            PixelEncoding::Png => ImageFormat::Png,
        }
    }
}

/// Background image found inside an extracted theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundAsset {
    pub path: PathBuf,
    pub tiled: bool,
    pub encoding: PixelEncoding,
}

/// Lookup order: tiles before full images, JPEG before PNG
const CANDIDATES: [(&str, bool, PixelEncoding); 4] = [
    (TILED_JPEG, true, PixelEncoding::Jpeg),
    (TILED_PNG, true, PixelEncoding::Png),
    (BACKGROUND_JPEG, false, PixelEncoding::Jpeg),
    (BACKGROUND_PNG, false, PixelEncoding::Png),
];

impl BackgroundAsset {
    /// Find the background asset of an extracted theme
    pub fn locate(dir: &Path) -> Option<Self> {
        CANDIDATES.iter().find_map(|&(name, tiled, encoding)| {
            let path = dir.join(name);
            trace!("🔍 Looking for {path:?}");
            path.is_file().then_some(BackgroundAsset {
                path,
                tiled,
                encoding,
            })
        })
    }

    /// Decode the asset with the decoder matching its file name
    pub fn decode(&self) -> Result<DynamicImage> {
        let reader = BufReader::new(File::open(&self.path)?);
        let image = image::load(reader, self.encoding.image_format())?;
        debug!(
            "🖼️ Decoded {:?}: {}x{}",
            self.path,
            image.width(),
            image.height()
        );
        Ok(image)
    }
}

/// Repeat `tile` over a `width` x `height` canvas.
///
/// The step counts are truncated and the loops are inclusive, so a partial
/// last row and column are drawn too. Pixels are copied, not blended.
pub fn tile_canvas(tile: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let (tile_w, tile_h) = tile.dimensions();
    if tile_w == 0 || tile_h == 0 {
        return Err(ConvertError::Image(format!(
            "Cannot tile an empty {tile_w}x{tile_h} image"
        )));
    }

    let mut canvas = RgbaImage::new(width, height);
    let step_x = width / tile_w;
    let step_y = height / tile_h;
    trace!("🧱 Tiling {tile_w}x{tile_h} with steps {step_x}x{step_y}");

    for x in 0..=step_x {
        for y in 0..=step_y {
            imageops::replace(
                &mut canvas,
                tile,
                i64::from(x * tile_w),
                i64::from(y * tile_h),
            );
        }
    }
    Ok(canvas)
}

/// Produce the wallpaper image for an asset, or a blank canvas when there is none
pub fn compose(asset: Option<&BackgroundAsset>) -> Result<DynamicImage> {
    let Some(asset) = asset else {
        return Ok(DynamicImage::ImageRgba8(RgbaImage::new(
            WALLPAPER_WIDTH,
            WALLPAPER_HEIGHT,
        )));
    };

    let image = asset.decode()?;
    if !asset.tiled {
        return Ok(image);
    }
    let canvas = tile_canvas(&image.to_rgba8(), WALLPAPER_WIDTH, WALLPAPER_HEIGHT)?;
    Ok(DynamicImage::ImageRgba8(canvas))
}

/// Composite an image over black, premultiplying each channel by its alpha
fn flatten_on_black(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

/// Encode an image as baseline JPEG. JPEG has no alpha channel, so
/// translucent pixels are flattened onto black first.
pub fn encode_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let rgb = flatten_on_black(image);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(&rgb)?;
    writer.flush()?;
    Ok(())
}

/// Compose the wallpaper of an extracted theme into `output` (JPEG, quality 90).
///
/// Returns the asset that was used, `None` when the theme has no background.
pub fn convert_background(extract_dir: &Path, output: &Path) -> Result<Option<BackgroundAsset>> {
    let asset = BackgroundAsset::locate(extract_dir);
    match &asset {
        Some(found) => debug!(
            "🖼️ Background {:?} (tiled: {}, {:?})",
            found.path, found.tiled, found.encoding
        ),
        None => warn!("⚠️ Background not found in {extract_dir:?}, using a blank wallpaper"),
    }

    let image = compose(asset.as_ref())?;
    encode_jpeg(&image, output, WALLPAPER_JPEG_QUALITY)?;
    debug!("✅ Wrote wallpaper {output:?}");
    Ok(asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};
    use std::fs;
    use tempfile::TempDir;

    fn checker_tile(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn test_translucent_pixels_flatten_on_black() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([200, 100, 50, 128])
            } else {
                Rgba([200, 100, 50, 255])
            }
        }));
        let flat = flatten_on_black(&image);
        assert_eq!(flat.get_pixel(0, 0).0, [100, 50, 25]);
        assert_eq!(flat.get_pixel(1, 0).0, [200, 100, 50]);

        let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0])));
        assert_eq!(flatten_on_black(&clear).get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_locate_priority() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        assert_eq!(BackgroundAsset::locate(dir), None);

        fs::write(dir.join("background.png"), b"").unwrap();
        let asset = BackgroundAsset::locate(dir).unwrap();
        assert!(!asset.tiled);
        assert_eq!(asset.encoding, PixelEncoding::Png);

        fs::write(dir.join("tiled.png"), b"").unwrap();
        fs::write(dir.join("background.jpg"), b"").unwrap();
        let asset = BackgroundAsset::locate(dir).unwrap();
        assert!(asset.tiled);
        assert_eq!(asset.encoding, PixelEncoding::Png);

        fs::write(dir.join("tiled.jpg"), b"").unwrap();
        let asset = BackgroundAsset::locate(dir).unwrap();
        assert_eq!(asset.path, dir.join("tiled.jpg"));
        assert_eq!(asset.encoding, PixelEncoding::Jpeg);
    }

    #[test]
    fn test_tile_covers_partial_edges() {
        let tile = checker_tile(7, 5);
        let canvas = tile_canvas(&tile, 1920, 1920).unwrap();
        assert_eq!(canvas.dimensions(), (1920, 1920));
        for &(x, y) in &[(0, 0), (13, 9), (1919, 1919), (1918, 3), (4, 1917)] {
            assert_eq!(canvas.get_pixel(x, y), tile.get_pixel(x % 7, y % 5));
        }
    }

    #[test]
    fn test_tile_copies_without_blending() {
        let tile = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let canvas = tile_canvas(&tile, 8, 8).unwrap();
        assert_eq!(canvas.get_pixel(5, 5), &Rgba([10, 20, 30, 0]));
    }

    #[test]
    fn test_empty_tile_is_rejected() {
        let tile = RgbaImage::new(0, 3);
        assert!(matches!(
            tile_canvas(&tile, 1920, 1920),
            Err(ConvertError::Image(_))
        ));
    }

    #[test]
    fn test_convert_tiled_png() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        checker_tile(64, 64).save_with_format(dir.join("tiled.png"), ImageFormat::Png).unwrap();

        let output = dir.join("converted.jpg");
        let asset = convert_background(dir, &output).unwrap().unwrap();
        assert!(asset.tiled);

        let decoded = image::load_from_memory_with_format(&fs::read(&output).unwrap(), ImageFormat::Jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (1920, 1920));
    }

    #[test]
    fn test_convert_full_background_keeps_size() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let image = DynamicImage::ImageRgba8(checker_tile(40, 30));
        encode_jpeg(&image, &dir.join("background.jpg"), 95).unwrap();

        let output = dir.join("converted.jpg");
        convert_background(dir, &output).unwrap();
        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (40, 30));
    }

    #[test]
    fn test_missing_background_writes_blank_wallpaper() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("converted.jpg");

        assert_eq!(convert_background(temp_dir.path(), &output).unwrap(), None);
        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (1920, 1920));
    }
}
