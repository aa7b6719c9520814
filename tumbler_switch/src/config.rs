// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switch behavior configuration.
//!
//! All tunable interaction constants live in [`SwitchConfig`], injected at
//! construction. Visual constants (colors, shadows) are a renderer concern
//! and live outside this crate.

use crate::transition::Transition;

/// How a gesture that crossed the midpoint resolves at release.
///
/// During a drag the session records a sticky flag once the displayed side
/// first moves opposite the side the gesture started on. The two policies
/// interpret that flag differently when the pointer is released:
///
/// - [`StickyCrossing`](Self::StickyCrossing): any crossing is toggle
///   intent. A drag that crosses to the opposite side and returns to the
///   start side before release still inverts the starting value. This
///   matches the observed behavior of the reference implementation and is
///   the default.
/// - [`FinalPosition`](Self::FinalPosition): a drag commits the side it
///   rests on, so an out-and-back drag reverts with no value change and no
///   notification.
///
/// A press and release with no crossing is a tap under either policy and
/// always toggles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommitPolicy {
    /// Any midpoint crossing during the gesture inverts the starting value.
    #[default]
    StickyCrossing,
    /// The gesture commits whichever side it visually rests on at release.
    FinalPosition,
}

/// Behavior configuration for a [`Switch`](crate::Switch).
///
/// The default configuration reproduces the reference interaction: a
/// 0.3-second ease-out transition and sticky-crossing commit semantics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwitchConfig {
    /// Transition attached to animated render requests.
    pub transition: Transition,
    /// Release-time classification of drags that crossed the midpoint.
    pub commit_policy: CommitPolicy,
}
