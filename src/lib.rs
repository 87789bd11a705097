pub mod animation;
pub mod cli;
pub mod config;
pub mod display;
pub mod event_loop;
pub mod frames;
pub mod line_reader;
pub mod logging;
pub mod status;
pub mod track;
pub mod tui;
pub mod ui;

pub use config::SpinnerConfig;
pub use event_loop::{EventLoop, SpinnerEvent};
pub use status::{ProgressRange, StatusPanel, StatusView};
pub use track::TrackDisplay;
