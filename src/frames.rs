//! Frame sequence loading
//!
//! Frames are read once from `<asset_dir>/<prefix><index>.<extension>` and
//! scaled to fit the target pixel box, keeping their aspect ratio.

use image::imageops::FilterType;
use image::RgbImage;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("failed to load frame {index} from {}: {source}", .path.display())]
    Load {
        index: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("frame sequence must contain at least one frame")]
    Empty,
}

/// Where the frames live and how big they are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub asset_dir: PathBuf,
    pub prefix: String,
    pub extension: String,
    pub count: usize,
    pub width_px: u32,
    pub height_px: u32,
}

impl FrameSpec {
    pub fn frame_path(&self, index: usize) -> PathBuf {
        frame_path(&self.asset_dir, &self.prefix, index, &self.extension)
    }
}

pub fn frame_path(dir: &Path, prefix: &str, index: usize, extension: &str) -> PathBuf {
    dir.join(format!("{}{}.{}", prefix, index, extension))
}

/// Fixed, immutable set of pre-scaled frames. `None` slots are blank.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Option<RgbImage>>,
}

impl FrameSequence {
    /// Loads every frame, failing on the first one that cannot be read.
    pub fn load(spec: &FrameSpec) -> Result<Self, FrameError> {
        if spec.count == 0 {
            return Err(FrameError::Empty);
        }
        info!(
            "Loading {} frames from {}",
            spec.count,
            spec.asset_dir.display()
        );
        let frames = (0..spec.count)
            .map(|index| load_frame(spec, index).map(Some))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FrameSequence { frames })
    }

    /// Loads what it can; frames that fail to load stay blank.
    pub fn load_lenient(spec: &FrameSpec) -> Self {
        let frames = (0..spec.count.max(1))
            .map(|index| match load_frame(spec, index) {
                Ok(frame) => Some(frame),
                Err(e) => {
                    warn!("{}; drawing a blank frame instead", e);
                    None
                }
            })
            .collect();
        FrameSequence { frames }
    }

    pub fn from_images(frames: Vec<Option<RgbImage>>) -> Result<Self, FrameError> {
        if frames.is_empty() {
            return Err(FrameError::Empty);
        }
        Ok(FrameSequence { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RgbImage> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    pub fn blank_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_none()).count()
    }
}

fn load_frame(spec: &FrameSpec, index: usize) -> Result<RgbImage, FrameError> {
    let path = spec.frame_path(index);
    let original = image::open(&path).map_err(|source| FrameError::Load {
        index,
        path: path.clone(),
        source,
    })?;
    let scaled = original
        .resize(spec.width_px, spec.height_px, FilterType::Lanczos3)
        .to_rgb8();
    debug!(
        "Loaded {} ({}x{} -> {}x{})",
        path.display(),
        original.width(),
        original.height(),
        scaled.width(),
        scaled.height()
    );
    Ok(scaled)
}
