mod input;

pub use input::map_key_event;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossbeam::channel::Sender;
use image::RgbImage;
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Gauge, Paragraph, Widget},
    Frame, Terminal,
};
use std::error::Error;
use std::io::{self, Stdout};
use std::thread;

use crate::display::{Display, SplashView};
use crate::event_loop::SpinnerEvent;
use crate::status::StatusView;

const PROGRESS_BAR_WIDTH: u16 = 60;
const PROGRESS_TRACK_COLOR: Color = Color::Rgb(0x37, 0x37, 0x37);

/// Paints one frame image with upper half blocks, two pixel rows per cell.
/// A missing frame paints nothing.
pub struct TrackWidget<'a> {
    frame: Option<&'a RgbImage>,
}

impl<'a> TrackWidget<'a> {
    pub fn new(frame: Option<&'a RgbImage>) -> Self {
        TrackWidget { frame }
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(frame) = self.frame else {
            return;
        };
        let cols = (frame.width().min(u32::from(area.width))) as u16;
        let rows = (frame.height().div_ceil(2).min(u32::from(area.height))) as u16;

        for row in 0..rows {
            for col in 0..cols {
                let x = u32::from(col);
                let top_y = u32::from(row) * 2;
                let top = frame.get_pixel(x, top_y);
                let bottom = if top_y + 1 < frame.height() {
                    frame.get_pixel(x, top_y + 1)
                } else {
                    top
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("▀")
                        .set_fg(Color::Rgb(top[0], top[1], top[2]))
                        .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                }
            }
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Lays out the splash: the track in the middle, the status row underneath.
pub fn render_splash(f: &mut Frame, view: &SplashView<'_>, track_size: (u16, u16)) {
    let size = f.area();
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), size);

    let (track_width, track_height) = track_size;
    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(track_height),
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Status row
        Constraint::Min(0),
    ])
    .split(size);

    let track_area = centered(chunks[1], track_width, track_height);
    f.render_widget(TrackWidget::new(view.frame), track_area);

    match view.status {
        StatusView::Hidden => {}
        StatusView::Text(text) => {
            let label = Paragraph::new(text.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(label, chunks[3]);
        }
        StatusView::Progress(value) => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::White).bg(PROGRESS_TRACK_COLOR))
                .ratio(view.range.fraction(*value))
                .label("");
            f.render_widget(gauge, centered(chunks[3], PROGRESS_BAR_WIDTH, 1));
        }
    }
}

/// The full-screen splash needs stdout on a terminal and stdin free for the
/// status protocol. With stdin on the same terminal, raw mode and key reads
/// would take over the bytes the line reader waits for.
pub fn use_terminal(headless: bool, stdout_tty: bool, stdin_tty: bool) -> bool {
    !headless && stdout_tty && !stdin_tty
}

/// Full-screen splash on the controlling terminal. Restores the terminal on drop.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    track_size: (u16, u16),
}

impl TerminalDisplay {
    pub fn new(track_size: (u16, u16)) -> Result<Self, Box<dyn Error>> {
        log::info!("Setting up terminal");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(TerminalDisplay {
            terminal,
            track_size,
        })
    }
}

impl Display for TerminalDisplay {
    fn draw(&mut self, view: &SplashView<'_>) -> Result<(), Box<dyn Error>> {
        let track_size = self.track_size;
        self.terminal.draw(|f| render_splash(f, view, track_size))?;
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = self.terminal.show_cursor();
        log::info!("Terminal restored");
    }
}

/// Forwards quit keys and resizes from the terminal to the event loop.
pub fn spawn_terminal_events(event_tx: Sender<SpinnerEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let forwarded = match event::read() {
            Ok(Event::Key(key_event)) => {
                log::debug!("Key event received: {:?}", key_event);
                map_key_event(key_event)
            }
            Ok(Event::Resize(width, height)) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                Some(SpinnerEvent::Resize)
            }
            Ok(_) => None,
            Err(e) => {
                log::error!("Terminal event error: {}", e);
                break;
            }
        };
        if let Some(event) = forwarded {
            if event_tx.send(event).is_err() {
                break;
            }
        }
    })
}
