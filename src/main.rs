use clap::Parser;
use crossbeam::channel::{self, Sender};
use splashrs::{
    animation::AnimationClock,
    cli::Args,
    display::Display,
    frames::FrameSequence,
    line_reader::spawn_line_reader,
    logging,
    tui::{spawn_terminal_events, use_terminal, TerminalDisplay},
    ui::PlainDisplay,
    EventLoop, SpinnerConfig, SpinnerEvent, StatusPanel, TrackDisplay,
};
use std::io::{self, BufReader, IsTerminal};

fn main() {
    let args = parse_command_line_arguments();
    let config = load_configuration(&args);
    initialize_logging(&config);

    let (event_tx, event_rx) = channel::unbounded();
    let track = TrackDisplay::new(load_frames(&config), config.cycle());
    let panel = match config.progress_range() {
        Ok(range) => StatusPanel::new(range),
        Err(error_msg) => exit_with_error(&error_msg),
    };

    spawn_line_reader(BufReader::new(io::stdin()), event_tx.clone());
    AnimationClock::new(config.tick_interval(), event_tx.clone()).start();
    let display = create_display(&config, &event_tx);

    let mut event_loop =
        EventLoop::new(track, panel, display, event_rx).exit_on_eof(config.exit_on_eof);
    event_loop.run();
    drop(event_loop);
    log::info!("Splash screen exiting");
}

fn parse_command_line_arguments() -> Args {
    Args::parse()
}

fn load_configuration(args: &Args) -> SpinnerConfig {
    let mut config = match SpinnerConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with_error(&e.to_string()),
    };
    config.apply_args(args);
    if let Err(e) = config.validate() {
        exit_with_error(&e.to_string());
    }
    config
}

fn initialize_logging(config: &SpinnerConfig) {
    let level = config.log_level_filter().unwrap_or(log::LevelFilter::Info);
    if let Err(e) = logging::init_logger(level) {
        eprintln!("Warning: logging disabled: {}", e);
        return;
    }
    log::info!("Application starting");
    log::debug!("Configuration: {:?}", config);
}

fn load_frames(config: &SpinnerConfig) -> FrameSequence {
    let spec = config.frame_spec();
    match FrameSequence::load(&spec) {
        Ok(frames) => frames,
        Err(e) => {
            log::error!("Frame assets incomplete: {}", e);
            let frames = FrameSequence::load_lenient(&spec);
            log::warn!(
                "Continuing with {} of {} frames blank",
                frames.blank_count(),
                frames.len()
            );
            frames
        }
    }
}

fn create_display(config: &SpinnerConfig, event_tx: &Sender<SpinnerEvent>) -> Box<dyn Display> {
    let stdin_tty = io::stdin().is_terminal();
    if stdin_tty && !config.headless {
        log::info!("Standard input is a terminal, full-screen splash disabled");
    }
    if use_terminal(config.headless, io::stdout().is_terminal(), stdin_tty) {
        match TerminalDisplay::new((config.frame_width, config.frame_height)) {
            Ok(display) => {
                spawn_terminal_events(event_tx.clone());
                return Box::new(display);
            }
            Err(e) => log::error!("Terminal setup failed, falling back to plain output: {}", e),
        }
    }

    log::info!("Using plain status output");
    match PlainDisplay::new() {
        Ok(display) => Box::new(display),
        Err(e) => exit_with_error(&format!("Error creating status output: {}", e)),
    }
}

fn exit_with_error(error_msg: &str) -> ! {
    log::error!("{}", error_msg);
    eprintln!("{}", error_msg);
    std::process::exit(1);
}
