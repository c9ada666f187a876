//! Logging bootstrap for the console shell.
//!
//! File output goes to `./storefront.log` in the current working directory.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./storefront.log";
const LEVEL: LevelFilter = LevelFilter::Info;

/// Destination for log output.
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

/// Initialize the global logger. Safe to call once per process; a failure to
/// create the log file degrades to the remaining destinations.
pub fn initialize(destination: LogDestination) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            LEVEL,
            build_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(Path::new(LOG_FILE)) {
            Ok(file) => loggers.push(WriteLogger::new(LEVEL, build_config(), file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
