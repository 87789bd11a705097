use crate::status::{ProgressRange, StatusView};
use image::RgbImage;
use std::error::Error;

/// Snapshot of everything a display needs to paint one frame of the splash.
#[derive(Debug, Clone, Copy)]
pub struct SplashView<'a> {
    pub frame: Option<&'a RgbImage>,
    pub frame_index: usize,
    pub status: &'a StatusView,
    pub range: ProgressRange,
}

pub trait Display {
    fn draw(&mut self, view: &SplashView<'_>) -> Result<(), Box<dyn Error>>;
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn draw(&mut self, view: &SplashView<'_>) -> Result<(), Box<dyn Error>> {
        (**self).draw(view)
    }
}
