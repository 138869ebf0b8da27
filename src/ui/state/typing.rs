// SPDX-License-Identifier: MPL-2.0
//! Character-by-character reveal of the hero greeting.
//!
//! Driven by a periodic tick subscription owned by the application. The
//! reveal advances one character per tick and reaches a terminal state
//! exactly once; the application drops the subscription as soon as
//! [`TypingReveal::is_running`] turns false, so no tick fires after
//! completion or teardown.

use std::time::Duration;

/// Interval between reveal steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Progressive reveal of a fixed target string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    target: String,
    revealed: usize,
    char_count: usize,
}

impl TypingReveal {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let char_count = target.chars().count();
        Self {
            target,
            revealed: 0,
            char_count,
        }
    }

    /// Reveals one more character. Ticks after completion are no-ops.
    pub fn tick(&mut self) {
        if self.revealed < self.char_count {
            self.revealed += 1;
        }
    }

    /// The currently revealed prefix, always on a character boundary.
    pub fn visible(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((byte_offset, _)) => &self.target[..byte_offset],
            None => &self.target,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.char_count
    }

    /// Whether the tick subscription should stay alive.
    pub fn is_running(&self) -> bool {
        !self.is_complete()
    }
}
