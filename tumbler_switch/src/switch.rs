// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switch state machine: commit an on/off value across taps and drags.
//!
//! ## Usage
//!
//! 1) Construct a [`Switch`] with the control's local bounds (and optionally
//!    a [`SwitchConfig`]).
//! 2) Feed pointer events: [`Switch::start`], [`Switch::update`], and
//!    [`Switch::end`] or [`Switch::cancel`], in that order.
//! 3) Apply the returned [`SwitchEvent`]s: render requests describe the
//!    visuals to show, and [`SwitchEvent::ValueChanged`] reports
//!    user-interaction commits.
//! 4) Use [`Switch::set_value`] for programmatic changes; it renders but
//!    never notifies.
//!
//! While a gesture is active the displayed side follows the pointer's
//! relation to the horizontal midpoint of the bounds, and the thumb is shown
//! in its widened [`ThumbWidth::Tracking`] variant. The committed value only
//! changes when the gesture ends.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::config::{CommitPolicy, SwitchConfig};
use crate::transition::Transition;

/// Which side of the switch a value or pointer position maps to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The off side (left).
    Off,
    /// The on side (right).
    On,
}

impl Side {
    /// The side displaying a committed value.
    #[must_use]
    pub const fn of_value(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }

    /// The value this side displays.
    #[must_use]
    pub const fn as_value(self) -> bool {
        matches!(self, Self::On)
    }

    /// Classifies a pointer position against the horizontal midpoint of
    /// `bounds`.
    ///
    /// The comparison is well-defined for any real-valued position,
    /// including positions outside the bounds, so out-of-bounds drags need
    /// no explicit clamping.
    #[must_use]
    pub fn of_point(pos: Point, bounds: Rect) -> Self {
        Self::of_value(pos.x > bounds.center().x)
    }
}

/// Thumb width variant to render.
///
/// While a gesture is active the thumb widens by a fixed increment for
/// elastic touch feedback, and stays widened for the remainder of the
/// gesture. The widened form collapses back to resting width at gesture end
/// or cancel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThumbWidth {
    /// Normal thumb width, shown while no gesture is active.
    Resting,
    /// Widened thumb, shown for the duration of an active gesture.
    Tracking,
}

/// A render directive issued by the switch to its host renderer.
///
/// The switch never draws; it describes the presentation to show. A request
/// with a [`Transition`] asks the renderer to interpolate from its current
/// presentation (thumb position, colors, shadow path); `None` asks for an
/// immediate snap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Side to display.
    pub side: Side,
    /// Thumb width variant to display.
    pub width: ThumbWidth,
    /// Transition to animate with, or `None` for an immediate snap.
    pub transition: Option<Transition>,
}

/// An event emitted by a switch operation, to be applied by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwitchEvent {
    /// Show the described presentation.
    Render(RenderRequest),
    /// The committed value changed due to user interaction.
    ///
    /// Emitted at most once per completed gesture, after the accompanying
    /// render request, and never for [`Switch::set_value`].
    ValueChanged {
        /// The newly committed value.
        value: bool,
    },
}

/// State recorded for the duration of one pointer gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackingSession {
    /// Pointer position at gesture start, in the control's local space.
    pub start_pos: Point,
    /// Committed value when the gesture began.
    pub start_value: bool,
    /// Sticky flag, set once the displayed side first moves opposite
    /// `start_value`. Never cleared for the rest of the gesture.
    pub changed_while_tracking: bool,
}

/// The switch interaction controller.
///
/// Owns the committed value, the displayed side, and the tracking session of
/// an active gesture. See the [crate docs](crate) for the event contract.
#[derive(Clone, Debug)]
pub struct Switch {
    config: SwitchConfig,
    bounds: Rect,
    value: bool,
    visual_value: bool,
    session: Option<TrackingSession>,
}

impl Switch {
    /// Creates a switch with the given local bounds and default
    /// configuration, initially off.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, SwitchConfig::default())
    }

    /// Creates a switch with the given local bounds and configuration,
    /// initially off.
    #[must_use]
    pub fn with_config(bounds: Rect, config: SwitchConfig) -> Self {
        Self {
            config,
            bounds,
            value: false,
            visual_value: false,
            session: None,
        }
    }

    /// Returns the committed value.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Returns the currently displayed value, which may differ from
    /// [`Switch::value`] while a drag is in progress.
    #[must_use]
    pub fn visual_value(&self) -> bool {
        self.visual_value
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the active tracking session, if any.
    #[must_use]
    pub fn session(&self) -> Option<TrackingSession> {
        self.session
    }

    /// Returns the control bounds used for midpoint classification.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the control bounds, e.g. after a host relayout.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Returns the behavior configuration.
    #[must_use]
    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// The render request describing the current state, without a
    /// transition.
    ///
    /// Hosts that re-render unconditionally on every layout pass can apply
    /// this at any time; it is a pure query.
    #[must_use]
    pub fn render_state(&self) -> RenderRequest {
        RenderRequest {
            side: Side::of_value(self.visual_value),
            width: self.thumb_width(),
            transition: None,
        }
    }

    /// Sets the committed value programmatically.
    ///
    /// The displayed side follows immediately and a render request is always
    /// emitted, even when `value` equals the current value. `ValueChanged`
    /// is never emitted for programmatic sets.
    pub fn set_value(&mut self, value: bool, animated: bool) -> Vec<SwitchEvent> {
        self.value = value;
        self.visual_value = value;
        vec![SwitchEvent::Render(RenderRequest {
            side: Side::of_value(value),
            width: self.thumb_width(),
            transition: animated.then_some(self.config.transition),
        })]
    }

    /// Begins a gesture at `pos`.
    ///
    /// Records the tracking session and requests the widened "active"
    /// presentation of the current side. The press position is recorded but
    /// does not influence classification; only `update` positions do.
    ///
    /// Starting while a gesture is already active violates the host
    /// contract: debug builds assert, release builds ignore the event.
    pub fn start(&mut self, pos: Point) -> Vec<SwitchEvent> {
        debug_assert!(
            self.session.is_none(),
            "gesture start received while tracking"
        );
        if self.session.is_some() {
            return Vec::new();
        }
        self.session = Some(TrackingSession {
            start_pos: pos,
            start_value: self.value,
            changed_while_tracking: false,
        });
        vec![SwitchEvent::Render(RenderRequest {
            side: Side::of_value(self.visual_value),
            width: ThumbWidth::Tracking,
            transition: Some(self.config.transition),
        })]
    }

    /// Moves the active gesture to `pos`.
    ///
    /// The displayed side follows the pointer's relation to the horizontal
    /// midpoint. A render request is emitted only when the side changes;
    /// crossing opposite the start side sets the session's sticky flag.
    ///
    /// Updating while idle violates the host contract: debug builds assert,
    /// release builds ignore the event.
    pub fn update(&mut self, pos: Point) -> Vec<SwitchEvent> {
        debug_assert!(
            self.session.is_some(),
            "gesture update received while idle"
        );
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let side = Side::of_point(pos, self.bounds);
        if side == Side::of_value(self.visual_value) {
            return Vec::new();
        }
        self.visual_value = side.as_value();
        if self.visual_value != session.start_value {
            session.changed_while_tracking = true;
        }
        vec![SwitchEvent::Render(RenderRequest {
            side,
            width: ThumbWidth::Tracking,
            transition: Some(self.config.transition),
        })]
    }

    /// Ends the active gesture, committing a value.
    ///
    /// A gesture that never crossed the midpoint is a tap and toggles.
    /// Crossing gestures resolve per the configured
    /// [`CommitPolicy`](crate::CommitPolicy). The committed presentation is
    /// rendered at resting width with a transition, and `ValueChanged`
    /// follows when the committed value differs from the gesture's starting
    /// value.
    ///
    /// Ending while idle violates the host contract: debug builds assert,
    /// release builds ignore the event.
    pub fn end(&mut self) -> Vec<SwitchEvent> {
        debug_assert!(self.session.is_some(), "gesture end received while idle");
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        let committed = match (self.config.commit_policy, session.changed_while_tracking) {
            // Sticky: any crossing is toggle intent, even if the drag
            // returned to the start side before release.
            (CommitPolicy::StickyCrossing, true) => !session.start_value,
            (CommitPolicy::FinalPosition, true) => self.visual_value,
            // Tap: toggle regardless of press position.
            (_, false) => !self.value,
        };
        self.value = committed;
        self.visual_value = committed;
        let mut events = vec![SwitchEvent::Render(RenderRequest {
            side: Side::of_value(committed),
            width: ThumbWidth::Resting,
            transition: Some(self.config.transition),
        })];
        if committed != session.start_value {
            events.push(SwitchEvent::ValueChanged { value: committed });
        }
        events
    }

    /// Cancels the active gesture, discarding all session state.
    ///
    /// The presentation snaps back to the committed value at resting width
    /// with no transition, so cancellation feels immediate. No value change
    /// is ever notified. Cancelling while idle is a no-op; hosts cancel
    /// defensively.
    pub fn cancel(&mut self) -> Vec<SwitchEvent> {
        if self.session.take().is_none() {
            return Vec::new();
        }
        self.visual_value = self.value;
        vec![SwitchEvent::Render(RenderRequest {
            side: Side::of_value(self.value),
            width: ThumbWidth::Resting,
            transition: None,
        })]
    }

    fn thumb_width(&self) -> ThumbWidth {
        if self.session.is_some() {
            ThumbWidth::Tracking
        } else {
            ThumbWidth::Resting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 50.0, 30.0)
    }

    fn left() -> Point {
        Point::new(10.0, 15.0)
    }

    fn right() -> Point {
        Point::new(40.0, 15.0)
    }

    #[test]
    fn new_switch_is_off_and_idle() {
        let switch = Switch::new(bounds());
        assert!(!switch.value());
        assert!(!switch.visual_value());
        assert!(!switch.is_tracking());
        assert_eq!(switch.session(), None);
    }

    #[test]
    fn side_of_point_uses_horizontal_midpoint() {
        let b = bounds();
        assert_eq!(Side::of_point(Point::new(24.9, 0.0), b), Side::Off);
        assert_eq!(Side::of_point(Point::new(25.0, 0.0), b), Side::Off);
        assert_eq!(Side::of_point(Point::new(25.1, 0.0), b), Side::On);
        // Vertical component is irrelevant.
        assert_eq!(Side::of_point(Point::new(40.0, -100.0), b), Side::On);
    }

    #[test]
    fn side_of_point_accepts_out_of_bounds_positions() {
        let b = bounds();
        assert_eq!(Side::of_point(Point::new(-500.0, 15.0), b), Side::Off);
        assert_eq!(Side::of_point(Point::new(500.0, 15.0), b), Side::On);
    }

    #[test]
    fn side_of_point_respects_bounds_origin() {
        let b = Rect::new(100.0, 0.0, 150.0, 30.0);
        assert_eq!(Side::of_point(Point::new(120.0, 15.0), b), Side::Off);
        assert_eq!(Side::of_point(Point::new(130.0, 15.0), b), Side::On);
    }

    #[test]
    fn start_records_session_and_widens_thumb() {
        let mut switch = Switch::new(bounds());
        let events = switch.start(left());

        assert!(switch.is_tracking());
        let session = switch.session().unwrap();
        assert_eq!(session.start_pos, left());
        assert!(!session.start_value);
        assert!(!session.changed_while_tracking);

        assert_eq!(
            events,
            vec![SwitchEvent::Render(RenderRequest {
                side: Side::Off,
                width: ThumbWidth::Tracking,
                transition: Some(Transition::DEFAULT),
            })]
        );
    }

    #[test]
    fn update_renders_only_on_side_change() {
        let mut switch = Switch::new(bounds());
        switch.start(left());

        // Moving within the start side changes nothing.
        assert!(switch.update(Point::new(5.0, 15.0)).is_empty());
        assert!(!switch.visual_value());

        // Crossing the midpoint flips the displayed side once.
        let events = switch.update(right());
        assert_eq!(events.len(), 1);
        assert!(switch.visual_value());

        // Further movement on the same side stays quiet.
        assert!(switch.update(Point::new(49.0, 15.0)).is_empty());
    }

    #[test]
    fn crossing_sets_sticky_flag_once() {
        let mut switch = Switch::new(bounds());
        switch.start(left());
        switch.update(right());
        assert!(switch.session().unwrap().changed_while_tracking);

        // Returning to the start side does not clear the flag.
        switch.update(left());
        assert!(switch.session().unwrap().changed_while_tracking);
    }

    #[test]
    fn moving_back_to_start_side_without_crossing_keeps_flag_clear() {
        let mut switch = Switch::new(bounds());
        switch.start(left());
        switch.update(Point::new(2.0, 15.0));
        switch.update(Point::new(20.0, 15.0));
        assert!(!switch.session().unwrap().changed_while_tracking);
    }

    #[test]
    fn end_commits_at_resting_width_and_clears_session() {
        let mut switch = Switch::new(bounds());
        switch.start(left());
        switch.update(right());
        let events = switch.end();

        assert!(!switch.is_tracking());
        assert_eq!(
            events[0],
            SwitchEvent::Render(RenderRequest {
                side: Side::On,
                width: ThumbWidth::Resting,
                transition: Some(Transition::DEFAULT),
            })
        );
        assert_eq!(events[1], SwitchEvent::ValueChanged { value: true });
    }

    #[test]
    fn cancel_snaps_back_without_transition() {
        let mut switch = Switch::new(bounds());
        switch.start(left());
        switch.update(right());
        let events = switch.cancel();

        assert!(!switch.is_tracking());
        assert!(!switch.value());
        assert!(!switch.visual_value());
        assert_eq!(
            events,
            vec![SwitchEvent::Render(RenderRequest {
                side: Side::Off,
                width: ThumbWidth::Resting,
                transition: None,
            })]
        );
    }

    #[test]
    fn cancel_while_idle_is_a_quiet_no_op() {
        let mut switch = Switch::new(bounds());
        assert!(switch.cancel().is_empty());
        assert!(!switch.is_tracking());
    }

    #[test]
    fn set_value_renders_tracking_width_during_gesture() {
        let mut switch = Switch::new(bounds());
        switch.start(left());
        let events = switch.set_value(true, false);

        assert_eq!(
            events,
            vec![SwitchEvent::Render(RenderRequest {
                side: Side::On,
                width: ThumbWidth::Tracking,
                transition: None,
            })]
        );
        // The gesture itself stays active.
        assert!(switch.is_tracking());
    }

    #[test]
    fn set_value_animated_carries_configured_transition() {
        let mut switch = Switch::new(bounds());
        let events = switch.set_value(true, true);
        assert_eq!(
            events,
            vec![SwitchEvent::Render(RenderRequest {
                side: Side::On,
                width: ThumbWidth::Resting,
                transition: Some(Transition::DEFAULT),
            })]
        );
    }

    #[test]
    fn render_state_is_a_pure_snapshot() {
        let mut switch = Switch::new(bounds());
        assert_eq!(
            switch.render_state(),
            RenderRequest {
                side: Side::Off,
                width: ThumbWidth::Resting,
                transition: None,
            }
        );

        switch.start(left());
        switch.update(right());
        assert_eq!(
            switch.render_state(),
            RenderRequest {
                side: Side::On,
                width: ThumbWidth::Tracking,
                transition: None,
            }
        );
        // The query did not disturb the session.
        assert!(switch.is_tracking());
    }

    #[test]
    fn set_bounds_moves_the_midpoint() {
        let mut switch = Switch::new(bounds());
        switch.set_bounds(Rect::new(0.0, 0.0, 200.0, 30.0));
        switch.start(left());
        // 40 is past the old midpoint but well inside the new left half.
        assert!(switch.update(Point::new(40.0, 15.0)).is_empty());
        assert!(!switch.visual_value());
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_builds_ignore_malformed_sequences() {
        let mut switch = Switch::new(bounds());
        assert!(switch.update(left()).is_empty());
        assert!(switch.end().is_empty());

        switch.start(left());
        assert!(switch.start(right()).is_empty());
        // The original session survives the spurious start.
        assert_eq!(switch.session().unwrap().start_pos, left());
    }
}
