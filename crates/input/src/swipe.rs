//! Swipe gesture classification
//!
//! A gesture registers once its displacement on either axis reaches the
//! threshold. The dominant axis picks horizontal or vertical (ties go
//! vertical) and the sign picks the side. Coordinates are screen-style: y
//! grows downward, so a negative `dy` is an upward swipe.

use crate::types::{Direction, SWIPE_THRESHOLD};

/// Classify a displacement (`end - start`) into a direction.
///
/// Returns `None` while both `|dx|` and `|dy|` are below `threshold`.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() < threshold && dy.abs() < threshold {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx < 0.0 {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    } else if dy < 0.0 {
        Some(Direction::Up)
    } else {
        Some(Direction::Down)
    }
}

/// Tracks one touch gesture at a time
///
/// Feed it the touch-start point and every subsequent touch-move point; it
/// yields a direction the first time the gesture crosses the threshold and
/// then stops tracking, so one gesture produces at most one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    threshold: f32,
}

impl SwipeTracker {
    /// Create a tracker with the default threshold
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Begin a gesture at `(x, y)`, replacing any gesture in progress
    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Report the current touch point; returns a direction once the gesture
    /// registers
    pub fn touch_move(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (sx, sy) = self.start?;
        let dir = classify_swipe(x - sx, y - sy, self.threshold)?;
        self.start = None;
        Some(dir)
    }

    /// Abandon the gesture in progress
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_ignored() {
        assert_eq!(classify_swipe(49.0, -49.0, 50.0), None);
        assert_eq!(classify_swipe(0.0, 0.0, 50.0), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(classify_swipe(-50.0, 0.0, 50.0), Some(Direction::Left));
        assert_eq!(classify_swipe(0.0, 50.0, 50.0), Some(Direction::Down));
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(classify_swipe(80.0, 30.0, 50.0), Some(Direction::Right));
        assert_eq!(classify_swipe(-80.0, 30.0, 50.0), Some(Direction::Left));
        assert_eq!(classify_swipe(30.0, -80.0, 50.0), Some(Direction::Up));
        assert_eq!(classify_swipe(-30.0, 80.0, 50.0), Some(Direction::Down));
    }

    #[test]
    fn test_tie_goes_vertical() {
        assert_eq!(classify_swipe(60.0, 60.0, 50.0), Some(Direction::Down));
        assert_eq!(classify_swipe(60.0, -60.0, 50.0), Some(Direction::Up));
    }

    #[test]
    fn test_tracker_one_move_per_gesture() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.touch_move(500.0, 500.0), None);

        tracker.touch_start(200.0, 200.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.touch_move(180.0, 210.0), None);
        assert_eq!(tracker.touch_move(120.0, 215.0), Some(Direction::Left));
        assert!(!tracker.is_tracking());

        // Continuing the same gesture does nothing until a new start.
        assert_eq!(tracker.touch_move(20.0, 215.0), None);
    }

    #[test]
    fn test_tracker_origin_start_is_valid() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(0.0, 0.0);
        assert_eq!(tracker.touch_move(0.0, -75.0), Some(Direction::Up));
    }

    #[test]
    fn test_tracker_cancel() {
        let mut tracker = SwipeTracker::with_threshold(10.0);
        assert_eq!(tracker.threshold(), 10.0);
        tracker.touch_start(5.0, 5.0);
        tracker.cancel();
        assert_eq!(tracker.touch_move(100.0, 5.0), None);
    }
}
