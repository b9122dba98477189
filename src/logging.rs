//! Logger setup.
//!
//! Filter comes from `GENPASS_LOG` (env_logger syntax), default `warn`.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub const LOG_ENV: &str = "GENPASS_LOG";

/// CLI mode: log to stderr.
pub fn init_stderr() {
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();
}

/// TUI mode: stderr would tear the screen, so logs go to `log_file` when
/// `GENPASS_LOG` is set and are dropped otherwise.
pub fn init_for_screen(log_file: &Path) {
    if std::env::var_os(LOG_ENV).is_none() {
        log::set_max_level(LevelFilter::Off);
        return;
    }

    if let Some(parent) = log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"));
    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}
