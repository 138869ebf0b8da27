// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition.
//!
//! Converts a raw touch sequence into a directional intent for the carousel.
//! Only the horizontal axis matters: the start X is captured when a finger
//! lands, every move overwrites the end X, and the classification happens
//! once when the finger lifts. Values are not cleared afterwards; the next
//! gesture's touch-start overwrites them.

/// Minimum horizontal travel, in pixels, before a touch counts as a swipe.
/// Anything smaller is treated as a tap or jitter.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (content should advance).
    Left,
    /// Finger moved right (content should step back).
    Right,
}

/// Tracks the horizontal extent of the gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f32,
    end_x: f32,
}

impl SwipeTracker {
    /// Records where the finger landed, discarding any stale values from the
    /// previous gesture.
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = x;
        self.end_x = x;
    }

    /// Records the latest finger position; only the most recent sample
    /// matters.
    pub fn touch_move(&mut self, x: f32) {
        self.end_x = x;
    }

    /// Classifies the finished gesture. Travel within the dead-zone yields
    /// `None`.
    pub fn touch_end(&self) -> Option<SwipeDirection> {
        let delta = self.start_x - self.end_x;
        if delta > SWIPE_THRESHOLD {
            Some(SwipeDirection::Left)
        } else if delta < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(start: f32, end: f32) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(start);
        tracker.touch_move(end);
        tracker.touch_end()
    }

    #[test]
    fn leftward_travel_past_threshold_is_a_left_swipe() {
        assert_eq!(gesture(200.0, 100.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn rightward_travel_past_threshold_is_a_right_swipe() {
        assert_eq!(gesture(100.0, 200.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn travel_inside_dead_zone_is_ignored() {
        assert_eq!(gesture(100.0, 120.0), None);
        assert_eq!(gesture(120.0, 100.0), None);
    }

    #[test]
    fn travel_exactly_at_threshold_is_ignored() {
        assert_eq!(gesture(150.0, 100.0), None);
        assert_eq!(gesture(100.0, 150.0), None);
    }

    #[test]
    fn only_the_latest_move_sample_matters() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(200.0);
        tracker.touch_move(50.0);
        tracker.touch_move(190.0); // finger came back
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn touch_start_discards_previous_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        tracker.touch_move(100.0);
        assert_eq!(tracker.touch_end(), Some(SwipeDirection::Left));

        // A new tap without movement must not reuse the old end position.
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(), None);
    }
}
