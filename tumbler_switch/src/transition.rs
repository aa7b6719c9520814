// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition descriptions attached to render requests.
//!
//! The switch core never runs an animation itself. When a render request
//! carries a [`Transition`], the host renderer is expected to interpolate
//! from its current presentation to the requested one over
//! [`Transition::duration`] seconds, shaped by [`Easing`]. The animation is
//! fire-and-forget: the core does not await completion and later requests
//! simply retarget it.

/// Easing curve applied to a transition's normalized time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration into rest. The reference presentation for switch
    /// transitions, so also the default.
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Maps a normalized time `t` in `[0, 1]` to an eased progress value.
    ///
    /// Inputs outside `[0, 1]` are clamped before shaping, so the result is
    /// always in `[0, 1]` and the endpoints are exact.
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u * 0.5
                }
            }
        }
    }
}

/// Description of a visual transition between two switch presentations.
///
/// `Transition` is plain data; compare with [`Transition::DEFAULT`] or build
/// one with struct syntax. The default matches the reference presentation:
/// 0.3 seconds, ease-out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the transition in seconds.
    pub duration: f64,
    /// Easing curve shaping the transition.
    pub easing: Easing,
}

impl Transition {
    /// The reference transition: 0.3 seconds, ease-out.
    pub const DEFAULT: Self = Self {
        duration: 0.3,
        easing: Easing::EaseOut,
    };

    /// Eased progress in `[0, 1]` after `elapsed` seconds.
    ///
    /// A non-positive duration completes immediately.
    #[must_use]
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.sample(elapsed / self.duration)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}
