// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Each module here is a pure `(state, event) -> state` controller owning a
//! disjoint slice of the page state, separated from rendering so the page
//! behavior can be unit tested without a GUI runtime.

pub mod carousel;
pub mod section;
pub mod swipe;
pub mod tabs;
pub mod tilt;
pub mod typing;

// Re-export commonly used types for convenience
pub use carousel::Carousel;
pub use section::{Section, SectionTracker, SCROLL_LEAD};
pub use swipe::{SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use tabs::TimelineTab;
pub use tilt::{TiltState, HEADLINE_TILT_FACTOR, PORTRAIT_TILT_FACTOR};
pub use typing::{TypingReveal, TICK_INTERVAL};
