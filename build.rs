use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // An explicit environment override wins over the VERSION file
    let version = if let Ok(v) = env::var("TDESKDROID_VERSION") {
        v
    } else {
        let version_file = Path::new("VERSION");
        if version_file.exists() {
            fs::read_to_string(version_file)
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
                .trim()
                .to_string()
        } else {
            env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.1".to_string())
        }
    };

    println!("cargo:rustc-env=TDESKDROID_VERSION={}", version);
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=TDESKDROID_VERSION");
}
