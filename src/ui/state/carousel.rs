// SPDX-License-Identifier: MPL-2.0
//! Project carousel index management.
//!
//! One project is visible at a time. Navigation wraps around in both
//! directions, so the index is always a valid position in the fixed project
//! list. The list length is set once at construction and never changes for
//! the lifetime of the session.

/// Owns the current position of the single-card project carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// Creates a carousel over `count` entries, starting at the first.
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Advances to the next entry, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + 1) % self.count;
    }

    /// Steps to the previous entry, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + self.count - 1) % self.count;
    }

    /// Jumps directly to an entry. Out-of-range requests are folded back in
    /// by the same modulo rule next/prev use rather than rejected.
    pub fn jump_to(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.index = index % self.count;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carousel_starts_at_zero() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.count(), 5);
    }

    #[test]
    fn next_advances_by_one() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(4);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn n_steps_forward_land_on_modular_position() {
        let mut carousel = Carousel::new(5);
        for _ in 0..13 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 13 % 5);
    }

    #[test]
    fn n_steps_backward_land_on_modular_position() {
        let mut carousel = Carousel::new(5);
        for _ in 0..7 {
            carousel.prev();
        }
        // (0 - 7) mod 5 == 3
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(2);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 2);

        carousel.prev();
        carousel.next();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn jump_to_folds_out_of_range_index() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(12);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.jump_to(3);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
