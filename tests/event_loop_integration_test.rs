extern crate splashrs;

use crossbeam::channel;
use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use splashrs::animation::AnimationCursor;
use splashrs::display::{Display, SplashView};
use splashrs::frames::FrameSequence;
use splashrs::line_reader::spawn_line_reader;
use splashrs::{EventLoop, SpinnerEvent, StatusPanel, StatusView, TrackDisplay};
use std::error::Error;
use std::io::Cursor;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingDisplay {
    draws: Vec<(usize, bool, StatusView)>,
}

impl Display for RecordingDisplay {
    fn draw(&mut self, view: &SplashView<'_>) -> Result<(), Box<dyn Error>> {
        self.draws
            .push((view.frame_index, view.frame.is_some(), view.status.clone()));
        Ok(())
    }
}

struct FailingDisplay;

impl Display for FailingDisplay {
    fn draw(&mut self, _view: &SplashView<'_>) -> Result<(), Box<dyn Error>> {
        Err("screen unavailable".into())
    }
}

fn track(start: Instant) -> TrackDisplay {
    let frames = FrameSequence::from_images(vec![
        Some(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]))),
        None,
        Some(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]))),
        None,
    ])
    .unwrap();
    TrackDisplay::with_cursor(
        frames,
        AnimationCursor::with_start(4, Duration::from_millis(1000), start),
    )
}

#[test]
fn integration_test_stdin_lines_drive_status() {
    let (event_tx, event_rx) = channel::unbounded();
    let input = Cursor::new(b"50\nInstalling drivers...\n\n100\n".to_vec());
    spawn_line_reader(input, event_tx)
        .join()
        .expect("Line reader thread panicked");

    let mut event_loop = EventLoop::new(
        track(Instant::now()),
        StatusPanel::default(),
        RecordingDisplay::default(),
        event_rx,
    )
    .exit_on_eof(true);
    event_loop.run();

    assert!(!event_loop.is_input_open());
    assert_eq!(event_loop.panel().view(), &StatusView::Progress(100));

    let statuses: Vec<StatusView> = event_loop
        .display()
        .draws
        .iter()
        .map(|(_, _, status)| status.clone())
        .collect();
    assert_eq!(
        statuses,
        vec![
            StatusView::Hidden,
            StatusView::Progress(50),
            StatusView::Text("Installing drivers...".to_string()),
            StatusView::Progress(100),
        ],
        "empty line must not trigger a redraw"
    );
}

#[test]
fn integration_test_ticks_redraw_on_frame_change() {
    let start = Instant::now();
    let (event_tx, event_rx) = channel::unbounded();

    for ms in [100, 300, 500, 600, 800, 1100] {
        event_tx
            .send(SpinnerEvent::Tick(start + Duration::from_millis(ms)))
            .unwrap();
    }
    event_tx.send(SpinnerEvent::Quit).unwrap();

    let mut event_loop = EventLoop::new(
        track(start),
        StatusPanel::default(),
        RecordingDisplay::default(),
        event_rx,
    );
    event_loop.run();

    let frames: Vec<(usize, bool)> = event_loop
        .display()
        .draws
        .iter()
        .map(|(index, painted, _)| (*index, *painted))
        .collect();
    assert_eq!(
        frames,
        vec![
            (0, true),
            (1, false),
            (2, true),
            (3, false),
            (0, true),
        ]
    );
}

#[test]
fn integration_test_window_survives_input_close() {
    let (event_tx, event_rx) = channel::unbounded();
    event_tx
        .send(SpinnerEvent::Line("Almost there".to_string()))
        .unwrap();
    event_tx.send(SpinnerEvent::InputClosed).unwrap();
    event_tx.send(SpinnerEvent::Resize).unwrap();

    let handle = thread::spawn(move || {
        let mut event_loop = EventLoop::new(
            track(Instant::now()),
            StatusPanel::default(),
            RecordingDisplay::default(),
            event_rx,
        );
        event_loop.run();
        event_loop
    });

    thread::sleep(Duration::from_millis(100));
    assert!(!handle.is_finished(), "loop must keep running after EOF");

    event_tx.send(SpinnerEvent::Quit).unwrap();
    let event_loop = handle.join().expect("Event loop thread panicked");

    assert!(!event_loop.is_input_open());
    assert_eq!(
        event_loop.panel().text(),
        Some("Almost there"),
        "last status stays on screen"
    );
    assert_eq!(event_loop.display().draws.len(), 3);
}

#[test]
fn integration_test_draw_errors_are_not_fatal() {
    let (event_tx, event_rx) = channel::unbounded();
    event_tx.send(SpinnerEvent::Line("75".to_string())).unwrap();
    drop(event_tx);

    let mut event_loop = EventLoop::new(
        track(Instant::now()),
        StatusPanel::default(),
        FailingDisplay,
        event_rx,
    );
    event_loop.run();

    assert_eq!(event_loop.panel().progress_value(), Some(75));
}
