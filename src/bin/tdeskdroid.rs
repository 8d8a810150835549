//! tdeskdroid command-line converter

use clap::Parser;
use tdeskdroid::{ConvertOptions, FOOTER, convert_all, exit_codes::*};
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = tdeskdroid::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = "Convert .tdesktop-theme archives into .attheme files"
)]
struct Args {
    /// Directory with the theme archives, theme.map, trans.map and overrides (defaults to CWD)
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Extraction directory (defaults to <source>/wip)
    #[arg(long)]
    wip_dir: Option<PathBuf>,

    /// Output directory for .attheme files (defaults to <source>/atthemes)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Key translation map (mobile-key=desktop-key)
    #[arg(long)]
    theme_map: Option<PathBuf>,

    /// Alpha prefix map (mobile-key=AA)
    #[arg(long)]
    trans_map: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off; prefix with json: for JSON logs)
    #[arg(long)]
    log_level: Option<String>,

    /// Print a JSON summary of the converted themes
    #[arg(long)]
    summary_json: bool,
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in converter");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("tdeskdroid {}", tdeskdroid::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    if let Some(ref level) = args.log_level {
        tdeskdroid::logger::JsonLogger::init_with_level(level);
    } else {
        tdeskdroid::logger::JsonLogger::init();
    }
    log::debug!("🚀 tdeskdroid {} started", VERSION);

    let options = ConvertOptions {
        source_dir: args.source_dir,
        wip_dir: args.wip_dir,
        output_dir: args.output_dir,
        theme_map: args.theme_map,
        trans_map: args.trans_map,
    };

    match convert_all(&options) {
        Ok(summary) => {
            println!("{FOOTER}");
            if args.summary_json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("❌ Failed to serialize summary: {e}");
                        return EXIT_ERROR;
                    }
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            log::error!("❌ Conversion failed: {e}");
            eprintln!("❌ Conversion failed: {e}");
            exit_code_for(&e)
        }
    }
}
