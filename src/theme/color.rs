//! Desktop → mobile color composition
//!
//! Desktop colors are `RRGGBB` or `RRGGBBAA`; mobile colors are `AARRGGBB`.

use super::defaults::OPAQUE_ALPHA;

/// Shape of a desktop color value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopColor<'a> {
    /// Six digits, alpha comes from the prefix table
    Rgb(&'a str),
    /// Eight digits with alpha as the last byte
    Rgba(&'a str),
    /// Empty, wrong length or non-ASCII
    Invalid,
}

impl<'a> DesktopColor<'a> {
    pub fn classify(value: &'a str) -> Self {
        if !value.is_ascii() {
            return DesktopColor::Invalid;
        }
        match value.len() {
            6 => DesktopColor::Rgb(value),
            8 => DesktopColor::Rgba(value),
            _ => DesktopColor::Invalid,
        }
    }
}

/// Move the trailing alpha byte of `RRGGBBAA` to the front
pub fn rgba_to_argb(rgba: &str) -> String {
    format!("{}{}", &rgba[6..], &rgba[..6])
}

/// Compose the color of a key that went through the translation table.
///
/// A 6-digit color without an alpha prefix stays 6 digits long.
pub fn compose_translated(value: &str, alpha: Option<&str>) -> Option<String> {
    match DesktopColor::classify(value) {
        DesktopColor::Rgb(rgb) => Some(match alpha {
            Some(alpha) => format!("{alpha}{rgb}"),
            None => rgb.to_string(),
        }),
        DesktopColor::Rgba(rgba) => Some(rgba_to_argb(rgba)),
        DesktopColor::Invalid => None,
    }
}

/// Compose the color of a key that only exists as an override; alpha defaults to opaque
pub fn compose_override(value: &str, alpha: Option<&str>) -> Option<String> {
    match DesktopColor::classify(value) {
        DesktopColor::Rgb(rgb) => Some(format!("{}{rgb}", alpha.unwrap_or(OPAQUE_ALPHA))),
        DesktopColor::Rgba(rgba) => Some(rgba_to_argb(rgba)),
        DesktopColor::Invalid => None,
    }
}
