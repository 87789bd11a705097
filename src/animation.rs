// animation.rs

use crate::event_loop::SpinnerEvent;
use crossbeam::channel::Sender;
use log::{info, trace};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_CYCLE_MS: u64 = 1000;
pub const DEFAULT_TICK_MS: u64 = 16;

/// Looping frame index driven by elapsed time.
///
/// Each cycle is split into `frame_count` equal slots, so the index runs
/// 0, 1, .., N-1 and then wraps to 0 again for as long as the clock runs.
#[derive(Debug, Clone)]
pub struct AnimationCursor {
    frame_count: usize,
    cycle: Duration,
    started: Instant,
    current: usize,
}

impl AnimationCursor {
    pub fn new(frame_count: usize, cycle: Duration) -> Self {
        Self::with_start(frame_count, cycle, Instant::now())
    }

    pub fn with_start(frame_count: usize, cycle: Duration, started: Instant) -> Self {
        AnimationCursor {
            frame_count,
            cycle,
            started,
            current: 0,
        }
    }

    pub fn value(&self) -> usize {
        self.current
    }

    pub fn value_at(&self, elapsed: Duration) -> usize {
        let cycle_ns = self.cycle.as_nanos();
        if self.frame_count <= 1 || cycle_ns == 0 {
            return 0;
        }
        let into_cycle = elapsed.as_nanos() % cycle_ns;
        let index = into_cycle * self.frame_count as u128 / cycle_ns;
        (index as usize).min(self.frame_count - 1)
    }

    /// Moves the cursor to the value for `now`. Returns true if it changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let next = self.value_at(now.saturating_duration_since(self.started));
        if next == self.current {
            return false;
        }
        trace!("Animation cursor {} -> {}", self.current, next);
        self.current = next;
        true
    }
}

/// Timer thread feeding `SpinnerEvent::Tick` into the event loop.
pub struct AnimationClock {
    interval: Duration,
    tick_tx: Sender<SpinnerEvent>,
}

impl AnimationClock {
    pub fn new(interval: Duration, tick_tx: Sender<SpinnerEvent>) -> Self {
        AnimationClock { interval, tick_tx }
    }

    /// Runs until the receiving side of the channel is dropped.
    pub fn start(self) -> thread::JoinHandle<()> {
        info!("Starting animation clock, tick interval {:?}", self.interval);
        thread::spawn(move || loop {
            thread::sleep(self.interval);
            if self.tick_tx.send(SpinnerEvent::Tick(Instant::now())).is_err() {
                info!("Event loop gone, animation clock stopping");
                break;
            }
        })
    }
}
