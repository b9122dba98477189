//! Settings file persistence.
//!
//! One line: `length,letters,numbers,symbols`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;
use crate::error::{Error, Result};
use crate::pass::config::MAX_LENGTH;

pub const SETTINGS_ENV: &str = "GENPASS_SETTINGS";
const LOG_FILE: &str = "genpass.log";

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{}\n",
        settings.pass_length, settings.letters, settings.numbers, settings.symbols
    );
    file.write_all(data.as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

/// Load settings, creating the file with defaults when it is missing and
/// rewriting it with defaults when it cannot be parsed.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match parse(line.trim()) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("{}: {}, resetting to defaults", path.display(), e);
            let settings = Settings::default();
            save(&settings, path)?;
            Ok(settings)
        }
    }
}

fn parse(line: &str) -> Result<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(Error::Settings(format!(
            "expected 4 fields, found {}",
            parts.len()
        )));
    }

    let pass_length = parts[0]
        .parse::<usize>()
        .map_err(|_| Error::Settings(format!("invalid length {:?}", parts[0])))?;
    let flag = |s: &str| {
        s.parse::<bool>()
            .map_err(|_| Error::Settings(format!("invalid toggle {:?}", s)))
    };

    Ok(Settings {
        pass_length: pass_length.min(MAX_LENGTH),
        letters: flag(parts[1])?,
        numbers: flag(parts[2])?,
        symbols: flag(parts[3])?,
    })
}

fn dir_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("genpass")
}

#[inline]
pub fn default_path() -> PathBuf {
    match env::var_os(SETTINGS_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dir_path().join("settings"),
    }
}

/// Screen-mode log file, kept next to the settings file in use.
pub fn log_path() -> PathBuf {
    log_path_for(&default_path())
}

fn log_path_for(settings: &Path) -> PathBuf {
    match settings.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE),
        _ => dir_path().join(LOG_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings");

        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,true,true,true\n");
    }

    #[test]
    fn saved_values_are_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let settings = Settings {
            pass_length: 24,
            letters: false,
            numbers: true,
            symbols: false,
        };

        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "twelve,yes\n").unwrap();

        assert_eq!(load(&path).unwrap(), Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,true,true,true\n");
    }

    #[test]
    fn parse_rejects_bad_fields() {
        assert!(parse("12,true,true").is_err());
        assert!(parse("x,true,true,true").is_err());
        assert!(parse("12,true,maybe,true").is_err());
        assert_eq!(parse(" 8 , false, true ,true").unwrap().pass_length, 8);
        assert_eq!(parse("100000,true,true,true").unwrap().pass_length, MAX_LENGTH);
    }

    #[test]
    fn log_file_follows_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("custom-settings");
        assert_eq!(log_path_for(&settings), dir.path().join("genpass.log"));
        assert_eq!(
            log_path_for(Path::new("settings")),
            dir_path().join("genpass.log")
        );
    }
}
