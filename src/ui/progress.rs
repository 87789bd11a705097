use crate::status::ProgressRange;
use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub fn status_text_style() -> Result<ProgressStyle, TemplateError> {
    Ok(ProgressStyle::default_spinner()
        .template("{spinner:.white} {wide_msg:.bold}")?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
}

pub fn progress_bar_style() -> Result<ProgressStyle, TemplateError> {
    Ok(ProgressStyle::default_bar()
        .template("{spinner:.white} [{bar:50.white/black}]")?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .progress_chars("█▊ "))
}

pub fn create_status_line(draw_target: ProgressDrawTarget) -> Result<ProgressBar, TemplateError> {
    let pb = ProgressBar::with_draw_target(None, draw_target);
    pb.set_style(status_text_style()?);
    Ok(pb)
}

/// Length and position of the bar for `value`, measured from the range floor.
pub fn bar_extent(range: ProgressRange, value: u32) -> (u64, u64) {
    let length = u64::from(range.max() - range.min());
    let position = u64::from(range.clamp(u64::from(value)) - range.min());
    (length, position)
}
