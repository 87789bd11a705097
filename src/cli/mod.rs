use clap::Parser;
use std::path::PathBuf;

/// Full-screen splash that animates a frame loop and shows status lines read from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (defaults to ./spinner.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the animation frames
    #[arg(long)]
    pub asset_dir: Option<PathBuf>,

    /// Number of animation frames
    #[arg(long)]
    pub frame_count: Option<usize>,

    /// Lowest value the progress bar shows
    #[arg(long)]
    pub progress_min: Option<u32>,

    /// Highest value the progress bar shows
    #[arg(long)]
    pub progress_max: Option<u32>,

    /// Draw a plain progress line on stderr instead of taking over the terminal
    #[arg(long)]
    pub headless: bool,

    /// Exit once standard input is closed
    #[arg(long)]
    pub exit_on_eof: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}
