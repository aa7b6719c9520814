// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumbler Switch: the interaction core of a drag-aware toggle switch.
//!
//! This crate implements the value and gesture state machine of a two-state
//! switch control, independent of any rendering or host toolkit. The
//! [`Switch`] owns the committed on/off value, an optional
//! [`TrackingSession`](switch::TrackingSession) while a pointer gesture is
//! active, and the transiently displayed side. It consumes pointer events and
//! emits [`SwitchEvent`]s describing what the host renderer should show and
//! when the committed value changed.
//!
//! ## Design Philosophy
//!
//! The controller never touches pixels. Every visual consequence of an event
//! is expressed as a [`RenderRequest`]: which side to show ([`Side`]), which
//! thumb width variant to use ([`ThumbWidth`]), and whether to animate the
//! change ([`Transition`](transition::Transition)). The host applies these
//! directives with whatever drawing technology it has; the switch holds the
//! only authoritative state.
//!
//! ## Gesture contract
//!
//! Events for a gesture arrive strictly in `start` → zero or more `update` →
//! (`end` xor `cancel`) order, driven synchronously by the host's event
//! dispatch. Out-of-order delivery is a host-contract violation: it trips a
//! debug assertion and is ignored in release builds.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tumbler_switch::{Switch, SwitchEvent};
//!
//! let mut switch = Switch::new(Rect::new(0.0, 0.0, 50.0, 30.0));
//! assert!(!switch.value());
//!
//! // Drag from the left half across the midpoint and release: commits on.
//! switch.start(Point::new(10.0, 15.0));
//! switch.update(Point::new(40.0, 15.0));
//! let events = switch.end();
//!
//! assert!(switch.value());
//! assert!(
//!     events
//!         .iter()
//!         .any(|e| matches!(e, SwitchEvent::ValueChanged { value: true }))
//! );
//! ```
//!
//! A press and release with no intervening movement is a tap and always
//! toggles, regardless of where the press landed:
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tumbler_switch::Switch;
//!
//! let mut switch = Switch::new(Rect::new(0.0, 0.0, 50.0, 30.0));
//! switch.start(Point::new(45.0, 15.0));
//! switch.end();
//! assert!(switch.value());
//! ```
//!
//! ## Commit semantics
//!
//! How a drag that crossed the midpoint resolves at release is governed by
//! [`CommitPolicy`](config::CommitPolicy). The default
//! [`StickyCrossing`](config::CommitPolicy::StickyCrossing) treats any
//! crossing as toggle intent, even if the drag returned to its starting side
//! before release. See the [`config`] module for the alternative
//! final-position semantics.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod switch;
pub mod transition;

pub use config::{CommitPolicy, SwitchConfig};
pub use switch::{RenderRequest, Side, Switch, SwitchEvent, ThumbWidth, TrackingSession};
pub use transition::{Easing, Transition};
