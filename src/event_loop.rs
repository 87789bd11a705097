// event_loop.rs

use crate::display::{Display, SplashView};
use crate::status::StatusPanel;
use crate::track::TrackDisplay;
use crossbeam::channel::Receiver;
use log::{debug, error, info, trace};
use std::time::Instant;

/// Everything that can wake the splash screen up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEvent {
    /// Animation timer fired.
    Tick(Instant),
    /// One line arrived on standard input, without its trailing newline.
    Line(String),
    /// Standard input reached EOF or failed.
    InputClosed,
    Resize,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub struct EventLoop<D: Display> {
    track: TrackDisplay,
    panel: StatusPanel,
    display: D,
    event_rx: Receiver<SpinnerEvent>,
    exit_on_eof: bool,
    input_open: bool,
}

impl<D: Display> EventLoop<D> {
    pub fn new(
        track: TrackDisplay,
        panel: StatusPanel,
        display: D,
        event_rx: Receiver<SpinnerEvent>,
    ) -> Self {
        EventLoop {
            track,
            panel,
            display,
            event_rx,
            exit_on_eof: false,
            input_open: true,
        }
    }

    pub fn exit_on_eof(mut self, exit_on_eof: bool) -> Self {
        self.exit_on_eof = exit_on_eof;
        self
    }

    /// Dispatches events until `Quit`, EOF with `exit_on_eof`, or every sender is gone.
    pub fn run(&mut self) {
        info!("Event loop running");
        self.redraw();
        loop {
            match self.event_rx.recv() {
                Ok(event) => {
                    if self.handle_event(event) == LoopControl::Exit {
                        break;
                    }
                }
                Err(e) => {
                    error!("Event channel error: {}", e);
                    break;
                }
            }
        }
        info!("Event loop finished");
    }

    fn handle_event(&mut self, event: SpinnerEvent) -> LoopControl {
        let needs_redraw = match event {
            SpinnerEvent::Tick(now) => self.track.on_tick(now),
            SpinnerEvent::Line(line) => {
                debug!("Input line: {:?}", line);
                self.panel.consume_line(&line)
            }
            SpinnerEvent::InputClosed => {
                info!("Standard input closed, keeping last status on screen");
                self.input_open = false;
                if self.exit_on_eof {
                    return LoopControl::Exit;
                }
                false
            }
            SpinnerEvent::Resize => true,
            SpinnerEvent::Quit => {
                info!("Quit requested");
                return LoopControl::Exit;
            }
        };

        if needs_redraw {
            self.redraw();
        }
        LoopControl::Continue
    }

    fn redraw(&mut self) {
        let view = SplashView {
            frame: self.track.current_frame(),
            frame_index: self.track.frame_index(),
            status: self.panel.view(),
            range: self.panel.range(),
        };
        trace!("Redrawing frame {}", view.frame_index);
        if let Err(e) = self.display.draw(&view) {
            error!("Failed to draw splash: {}", e);
        }
    }

    pub fn panel(&self) -> &StatusPanel {
        &self.panel
    }

    pub fn track(&self) -> &TrackDisplay {
        &self.track
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn is_input_open(&self) -> bool {
        self.input_open
    }
}
