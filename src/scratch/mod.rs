//! Scratch and output directory layout

pub mod directories;
pub mod paths;

pub use directories::ScratchDirectories;
pub use paths::ThemePaths;
