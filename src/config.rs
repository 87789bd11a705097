// config.rs

use crate::animation::{DEFAULT_CYCLE_MS, DEFAULT_TICK_MS};
use crate::cli::Args;
use crate::frames::FrameSpec;
use crate::status::{ProgressRange, DEFAULT_PROGRESS_MAX, DEFAULT_PROGRESS_MIN};
use config::{Config, Environment, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "spinner";
pub const ENV_PREFIX: &str = "SPINNER";
pub const DEFAULT_FRAME_COUNT: usize = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    pub asset_dir: PathBuf,
    pub frame_prefix: String,
    pub frame_extension: String,
    pub frame_count: usize,
    /// Track width in terminal cells.
    pub frame_width: u16,
    /// Track height in terminal cells, two image rows per cell.
    pub frame_height: u16,
    pub cycle_ms: u64,
    pub tick_ms: u64,
    pub progress_min: u32,
    pub progress_max: u32,
    pub exit_on_eof: bool,
    pub headless: bool,
    pub log_level: String,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        SpinnerConfig {
            asset_dir: PathBuf::from("../assets/spinner"),
            frame_prefix: "img_kommu_".to_string(),
            frame_extension: "jpg".to_string(),
            frame_count: DEFAULT_FRAME_COUNT,
            frame_width: 36,
            frame_height: 18,
            cycle_ms: DEFAULT_CYCLE_MS,
            tick_ms: DEFAULT_TICK_MS,
            progress_min: DEFAULT_PROGRESS_MIN,
            progress_max: DEFAULT_PROGRESS_MAX,
            exit_on_eof: false,
            headless: false,
            log_level: "info".to_string(),
        }
    }
}

impl SpinnerConfig {
    /// Layers an optional config file and `SPINNER_*` environment variables
    /// over the defaults. Without an explicit path, `spinner.toml` in the
    /// working directory is used if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                info!("Reading configuration from {}", path.display());
                File::from(path.to_path_buf()).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let config: SpinnerConfig = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Command line flags win over every other source.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(dir) = &args.asset_dir {
            self.asset_dir = dir.clone();
        }
        if let Some(count) = args.frame_count {
            self.frame_count = count;
        }
        if let Some(min) = args.progress_min {
            self.progress_min = min;
        }
        if let Some(max) = args.progress_max {
            self.progress_max = max;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self.headless |= args.headless;
        self.exit_on_eof |= args.exit_on_eof;
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::Invalid("frame_count must be at least 1".into()));
        }
        if self.cycle_ms == 0 {
            return Err(ConfigError::Invalid("cycle_ms must be greater than 0".into()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be greater than 0".into()));
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(ConfigError::Invalid("frame size must be non-zero".into()));
        }
        self.progress_range().map_err(ConfigError::Invalid)?;
        self.log_level_filter()?;
        Ok(())
    }

    pub fn progress_range(&self) -> Result<ProgressRange, String> {
        ProgressRange::new(self.progress_min, self.progress_max)
    }

    pub fn frame_spec(&self) -> FrameSpec {
        FrameSpec {
            asset_dir: self.asset_dir.clone(),
            prefix: self.frame_prefix.clone(),
            extension: self.frame_extension.clone(),
            count: self.frame_count,
            width_px: u32::from(self.frame_width),
            height_px: u32::from(self.frame_height) * 2,
        }
    }

    pub fn cycle(&self) -> Duration {
        Duration::from_millis(self.cycle_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}
