// status.rs

use log::{debug, trace};

pub const DEFAULT_PROGRESS_MIN: u32 = 5;
pub const DEFAULT_PROGRESS_MAX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Numeric,
    Text,
}

/// Classifies one input line. Numeric means every character is an ASCII digit.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Empty
    } else if line.chars().all(|c| c.is_ascii_digit()) {
        LineKind::Numeric
    } else {
        LineKind::Text
    }
}

/// Valid value range of the progress indicator, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRange {
    min: u32,
    max: u32,
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PROGRESS_MIN,
            max: DEFAULT_PROGRESS_MAX,
        }
    }
}

impl ProgressRange {
    pub fn new(min: u32, max: u32) -> Result<Self, String> {
        if min > max {
            return Err(format!(
                "Invalid progress range: minimum {} is greater than maximum {}",
                min, max
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn clamp(&self, value: u64) -> u32 {
        // max fits in u32, so the narrowing below is lossless
        value.clamp(u64::from(self.min), u64::from(self.max)) as u32
    }

    /// Parses a digit-only line. Values too large for u64 saturate to `max`.
    pub fn parse_digits(&self, digits: &str) -> u32 {
        match digits.parse::<u64>() {
            Ok(value) => self.clamp(value),
            Err(e) => {
                debug!("Progress value {:?} not representable ({}), using maximum", digits, e);
                self.max
            }
        }
    }

    /// Filled fraction of the indicator for `value`, in [0.0, 1.0].
    pub fn fraction(&self, value: u32) -> f64 {
        let span = self.max - self.min;
        if span == 0 {
            return 1.0;
        }
        f64::from(self.clamp(u64::from(value)) - self.min) / f64::from(span)
    }
}

/// What the status panel currently shows. Text and progress never show together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Hidden,
    Text(String),
    Progress(u32),
}

pub struct StatusPanel {
    range: ProgressRange,
    view: StatusView,
}

impl StatusPanel {
    pub fn new(range: ProgressRange) -> Self {
        StatusPanel {
            range,
            view: StatusView::Hidden,
        }
    }

    /// Applies one line of input. Returns true when the visible state changed.
    pub fn consume_line(&mut self, line: &str) -> bool {
        let next = match classify(line) {
            LineKind::Empty => {
                trace!("Ignoring empty input line");
                return false;
            }
            LineKind::Numeric => StatusView::Progress(self.range.parse_digits(line)),
            LineKind::Text => StatusView::Text(line.to_string()),
        };

        debug!("Status panel update: {:?}", next);
        let changed = next != self.view;
        self.view = next;
        changed
    }

    pub fn view(&self) -> &StatusView {
        &self.view
    }

    pub fn range(&self) -> ProgressRange {
        self.range
    }

    pub fn is_text_visible(&self) -> bool {
        matches!(self.view, StatusView::Text(_))
    }

    pub fn is_progress_visible(&self) -> bool {
        matches!(self.view, StatusView::Progress(_))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.view {
            StatusView::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn progress_value(&self) -> Option<u32> {
        match self.view {
            StatusView::Progress(value) => Some(value),
            _ => None,
        }
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new(ProgressRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Empty);
        assert_eq!(classify("42"), LineKind::Numeric);
        assert_eq!(classify("007"), LineKind::Numeric);
        assert_eq!(classify("4 2"), LineKind::Text);
        assert_eq!(classify("-5"), LineKind::Text);
        assert_eq!(classify("50\r"), LineKind::Text);
        assert_eq!(classify("٣"), LineKind::Text); // non-ASCII digit
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(ProgressRange::new(10, 5).is_err());
        assert!(ProgressRange::new(7, 7).is_ok());
    }

    #[test]
    fn test_clamp_and_overflow() {
        let range = ProgressRange::default();
        assert_eq!(range.parse_digits("0"), 5);
        assert_eq!(range.parse_digits("50"), 50);
        assert_eq!(range.parse_digits("250"), 100);
        assert_eq!(range.parse_digits("99999999999999999999999999"), 100);
    }

    #[test]
    fn test_fraction() {
        let range = ProgressRange::default();
        assert_eq!(range.fraction(5), 0.0);
        assert_eq!(range.fraction(100), 1.0);
        assert_eq!(range.fraction(0), 0.0);

        let flat = ProgressRange::new(50, 50).unwrap();
        assert_eq!(flat.fraction(50), 1.0);
    }

    #[test]
    fn test_consume_reports_changes() {
        let mut panel = StatusPanel::default();
        assert!(panel.consume_line("hello"));
        assert!(!panel.consume_line("hello"));
        assert!(!panel.consume_line(""));
        assert!(panel.consume_line("10"));
        assert_eq!(panel.progress_value(), Some(10));
    }
}
