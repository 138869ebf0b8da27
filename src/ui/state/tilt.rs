// SPDX-License-Identifier: MPL-2.0
//! Device tilt to parallax mapping.
//!
//! Stores the latest orientation sensor reading and derives per-element
//! rotation transforms from it. On platforms without an orientation source
//! no reading ever arrives and the state stays at the zero default, so the
//! parallax effect degrades to "off" instead of failing.

/// Rotation sensitivity applied to the hero headline.
pub const HEADLINE_TILT_FACTOR: f32 = 0.1;

/// Rotation sensitivity applied to the portrait; half the headline's so the
/// two move at visibly different depths.
pub const PORTRAIT_TILT_FACTOR: f32 = 0.05;

/// Latest front/back (`beta`) and left/right (`gamma`) tilt, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltState {
    beta: f32,
    gamma: f32,
}

impl TiltState {
    /// Applies a sensor sample. A reading with either axis absent is treated
    /// as "no update" and the prior value is retained.
    pub fn update(&mut self, beta: Option<f32>, gamma: Option<f32>) {
        if let (Some(beta), Some(gamma)) = (beta, gamma) {
            self.beta = beta;
            self.gamma = gamma;
        }
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Derives the `(rotate_x, rotate_y)` transform in degrees for an element
    /// with the given sensitivity factor.
    pub fn rotation(&self, factor: f32) -> (f32, f32) {
        (self.beta * factor, self.gamma * factor)
    }
}
