// Centralized names and constants for desktop and mobile theme files

// =================================
// Input files
// =================================
pub const THEME_ARCHIVE_SUFFIX: &str = ".tdesktop-theme";
pub const THEME_ARCHIVE_PATTERN: &str = "*.tdesktop-theme";
pub const MANIFEST_FILE: &str = "colors.tdesktop-theme";
pub const THEME_MAP_FILE: &str = "theme.map"; // mobile-key=desktop-key
pub const TRANS_MAP_FILE: &str = "trans.map"; // mobile-key=AA
pub const OVERRIDE_FILE_SUFFIX: &str = "map"; // appended to each "a.b." prefix

// =================================
// Scratch and output layout
// =================================
pub const DEFAULT_WIP_DIR: &str = "wip";
pub const DEFAULT_OUTPUT_DIR: &str = "atthemes";
pub const ATTHEME_EXTENSION: &str = "attheme";
pub const CONVERTED_WALLPAPER_FILE: &str = "converted.jpg";

// =================================
// Background assets, in lookup order
// =================================
pub const TILED_JPEG: &str = "tiled.jpg";
pub const TILED_PNG: &str = "tiled.png";
pub const BACKGROUND_JPEG: &str = "background.jpg";
pub const BACKGROUND_PNG: &str = "background.png";

pub const WALLPAPER_WIDTH: u32 = 1920;
pub const WALLPAPER_HEIGHT: u32 = 1920;
pub const WALLPAPER_JPEG_QUALITY: u8 = 90;

// =================================
// Colors
// =================================
pub const ALIAS_SENTINEL_KEY: &str = "whatever";
pub const ALIAS_SENTINEL_COLOR: &str = "ff00ff";
pub const MISSING_KEY_COLOR: &str = "00ff00";
pub const OPAQUE_ALPHA: &str = "ff";

// =================================
// Mobile theme wallpaper block
// =================================
pub const WALLPAPER_KEY: &str = "chat_wallpaper";
pub const WALLPAPER_START_MARKER: &[u8] = b"WPS\n";
pub const WALLPAPER_END_MARKER: &[u8] = b"\nWPE";
pub const WALLPAPER_CHUNK_SIZE: usize = 1024;
