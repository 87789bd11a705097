//! Plain status output
//!
//! Used when the splash cannot or should not take over the terminal:
//! - status text is shown next to a spinner
//! - numeric progress is shown as a bar
//!
//! Both share one indicatif line on stderr, so only one of them is ever visible.
//! Frame images are not drawn here.

mod progress;

pub use progress::{bar_extent, create_status_line, progress_bar_style, status_text_style};

use crate::display::{Display, SplashView};
use crate::status::StatusView;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMode {
    Text,
    Bar,
}

pub struct PlainDisplay {
    line: ProgressBar,
    text_style: ProgressStyle,
    bar_style: ProgressStyle,
    mode: LineMode,
}

impl PlainDisplay {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(draw_target: ProgressDrawTarget) -> Result<Self, Box<dyn Error>> {
        Ok(PlainDisplay {
            line: create_status_line(draw_target)?,
            text_style: status_text_style()?,
            bar_style: progress_bar_style()?,
            mode: LineMode::Text,
        })
    }

    fn switch_mode(&mut self, mode: LineMode) {
        if self.mode == mode {
            return;
        }
        debug!("Plain display switching to {:?} mode", mode);
        let style = match mode {
            LineMode::Text => self.text_style.clone(),
            LineMode::Bar => self.bar_style.clone(),
        };
        self.line.set_style(style);
        self.mode = mode;
    }

    pub fn progress_bar(&self) -> &ProgressBar {
        &self.line
    }
}

impl Display for PlainDisplay {
    fn draw(&mut self, view: &SplashView<'_>) -> Result<(), Box<dyn Error>> {
        match view.status {
            StatusView::Hidden => {
                self.switch_mode(LineMode::Text);
                self.line.set_message("");
            }
            StatusView::Text(text) => {
                self.switch_mode(LineMode::Text);
                self.line.set_message(text.clone());
            }
            StatusView::Progress(value) => {
                self.switch_mode(LineMode::Bar);
                let (length, position) = bar_extent(view.range, *value);
                self.line.set_length(length);
                self.line.set_position(position);
            }
        }
        self.line.tick();
        Ok(())
    }
}
