use splashrs::animation::AnimationCursor;
use std::time::{Duration, Instant};

#[test]
fn test_cursor_stays_in_range() {
    let frame_count = 30;
    let cursor = AnimationCursor::new(frame_count, Duration::from_millis(1000));
    for ms in (0..5000).step_by(7) {
        let value = cursor.value_at(Duration::from_millis(ms));
        assert!(value < frame_count, "index {} out of range at {} ms", value, ms);
    }
}

#[test]
fn test_cursor_reaches_last_frame_then_wraps() {
    let start = Instant::now();
    let mut cursor = AnimationCursor::with_start(30, Duration::from_millis(1000), start);

    cursor.advance(start + Duration::from_millis(990));
    assert_eq!(cursor.value(), 29);

    assert!(cursor.advance(start + Duration::from_millis(1000)));
    assert_eq!(cursor.value(), 0);

    cursor.advance(start + Duration::from_millis(2999));
    assert_eq!(cursor.value(), 29);
}

#[test]
fn test_cursor_is_monotonic_within_a_cycle() {
    let cursor = AnimationCursor::new(30, Duration::from_millis(1000));
    let values: Vec<usize> = (0..1000)
        .map(|ms| cursor.value_at(Duration::from_millis(ms)))
        .collect();
    assert!(values.windows(2).all(|w| w[1] == w[0] || w[1] == w[0] + 1));
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&29));
}

#[test]
fn test_advance_reports_change_only() {
    let start = Instant::now();
    let mut cursor = AnimationCursor::with_start(10, Duration::from_millis(1000), start);

    assert!(!cursor.advance(start + Duration::from_millis(50)));
    assert!(cursor.advance(start + Duration::from_millis(150)));
    assert!(!cursor.advance(start + Duration::from_millis(160)));
    assert_eq!(cursor.value(), 1);
}
