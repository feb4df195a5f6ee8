//! Logger setup.
//!
//! All user-facing output goes through `log`: info lines are printed bare,
//! warnings and errors get a prefix. `--verbose` adds timestamps and debug
//! messages from the romshelf crates; `--logfile` mirrors every line to a
//! file with ANSI escapes removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter};

use crate::error::CliError;

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?.map(Mutex::new);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("romshelf", level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            let line = if verbose {
                format!("{} {:<5} {}", buf.timestamp(), record.level(), record.args())
            } else {
                match record.level() {
                    Level::Info => record.args().to_string(),
                    Level::Warn => format!("warning: {}", record.args()),
                    Level::Error => format!("error: {}", record.args()),
                    level => format!("{}: {}", level.as_str().to_lowercase(), record.args()),
                }
            };

            if let Some(Ok(mut file)) = file.as_ref().map(Mutex::lock) {
                let _ = file.write_all(&strip_ansi_escapes::strip(line.as_bytes()));
                let _ = file.write_all(b"\n");
            }
            writeln!(buf, "{line}")
        });

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
