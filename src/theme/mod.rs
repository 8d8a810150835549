//! Desktop → mobile theme translation pipeline

pub mod archive;
pub mod attheme;
pub mod background;
pub mod color;
pub mod converter;
pub mod defaults;
pub mod manifest;
pub mod mapping;
pub mod writer;

// Re-export main types
pub use attheme::MobileTheme;
pub use background::{BackgroundAsset, PixelEncoding};
pub use converter::{ConvertedTheme, ThemeConverter};
pub use manifest::DesktopPalette;
pub use mapping::MappingTable;
