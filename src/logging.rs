use simplelog::*;
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// Directory the log file lives in: `$HOME/.local/share/splashrs/logs`.
pub fn log_dir() -> Result<PathBuf, Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("splashrs")
        .join("logs"))
}

/// Sends all log output to a file. The terminal belongs to the splash screen.
pub fn init_logger(level: LevelFilter) -> Result<(), Error> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("spinner.log"))?;

    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| Error::new(ErrorKind::Other, format!("Logger initialization failed: {}", e)))
}
