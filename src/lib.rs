//! tdeskdroid - convert desktop `.tdesktop-theme` packages into mobile `.attheme` themes
//!
//! This crate extracts desktop theme archives, resolves their color rules,
//! remaps them into the mobile key namespace and writes `.attheme` files with
//! an optional embedded JPEG wallpaper.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::too_many_arguments,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::single_match_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod scratch;
pub mod theme;
pub mod version;

// Re-export main API functions
pub use api::{ConversionSummary, ConvertOptions, FOOTER, convert_all, discover_themes};
pub use exceptions::ConvertError;

// Re-export pipeline types for library use
pub use theme::{DesktopPalette, MappingTable, MobileTheme};
