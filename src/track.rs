// track.rs

use crate::animation::AnimationCursor;
use crate::frames::FrameSequence;
use image::RgbImage;
use std::time::{Duration, Instant};

/// The animated track: a frame sequence plus the cursor selecting the frame.
pub struct TrackDisplay {
    frames: FrameSequence,
    cursor: AnimationCursor,
}

impl TrackDisplay {
    pub fn new(frames: FrameSequence, cycle: Duration) -> Self {
        let cursor = AnimationCursor::new(frames.len(), cycle);
        TrackDisplay { frames, cursor }
    }

    pub fn with_cursor(frames: FrameSequence, cursor: AnimationCursor) -> Self {
        TrackDisplay { frames, cursor }
    }

    /// Returns true when the frame index moved and the track needs a repaint.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.cursor.advance(now)
    }

    pub fn frame_index(&self) -> usize {
        self.cursor.value()
    }

    pub fn current_frame(&self) -> Option<&RgbImage> {
        self.frames.get(self.cursor.value())
    }
}
