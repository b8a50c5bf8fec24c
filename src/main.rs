// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Entry point for the cbuild binary.

use anyhow::Context;
use cbuild::{BuildConfig, SystemRunner};
use env_logger::Env;
use log::LevelFilter;

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(LevelFilter::Warn.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

/// Returns the process exit code.
fn main_entry() -> anyhow::Result<i32> {
    let config = BuildConfig::load().context("loading build configuration")?;
    let mut runner = SystemRunner;
    let result = cbuild::run(&config, std::env::args_os().skip(1), &mut runner);
    if let Err(e) = &result {
        eprintln!("cbuild: build failed: {e}");
    }
    Ok(cbuild::exit_code(&result))
}

fn main() {
    init_logging();
    match main_entry() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("cbuild: {e:#}");
            std::process::exit(1);
        }
    }
}
