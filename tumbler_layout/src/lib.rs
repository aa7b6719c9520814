// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumbler Layout: frame geometry for the switch's visual elements.
//!
//! Given the control's bounds and the presentation requested by
//! `tumbler_switch` (a [`Side`] and a [`ThumbWidth`]), this crate computes
//! where each visual element sits: the background, the thumb, and the on/off
//! content regions that hold labels or images. Renderers interpolate between
//! the frames of consecutive render requests; nothing here is stateful.
//!
//! All geometry is expressed in the coordinate space of the supplied bounds
//! rectangle, so the same math serves hosts that lay the control out at an
//! arbitrary origin.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use tumbler_layout::{Metrics, SwitchFrames};
//! use tumbler_switch::{Side, ThumbWidth};
//!
//! let bounds = Rect::new(0.0, 0.0, 50.0, 30.0);
//! let frames = SwitchFrames::compute(
//!     bounds,
//!     Side::Off,
//!     ThumbWidth::Resting,
//!     true,
//!     &Metrics::DEFAULT,
//! );
//!
//! // The resting thumb is a square inset by one unit.
//! assert_eq!(frames.thumb, Rect::new(1.0, 1.0, 29.0, 29.0));
//! // Rounded corners span half the control height.
//! assert_eq!(frames.background_radius, 15.0);
//! ```

#![no_std]

use kurbo::{Rect, RoundedRect, Size};
use tumbler_switch::{Side, ThumbWidth};

/// Layout constants for the switch.
///
/// The defaults reproduce the reference geometry: a one-unit inset around
/// the thumb, a five-unit elastic widening while tracking, and two-unit
/// corner radii when rounding is disabled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metrics {
    /// Gap between the thumb and the control edge on every side.
    pub thumb_inset: f64,
    /// Extra thumb width while a gesture is tracking.
    pub tracking_extra: f64,
    /// Corner radius used when the switch is not rounded.
    pub square_radius: f64,
}

impl Metrics {
    /// The reference metrics.
    pub const DEFAULT: Self = Self {
        thumb_inset: 1.0,
        tracking_extra: 5.0,
        square_radius: 2.0,
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Default control size when the host supplies no layout.
pub const DEFAULT_SIZE: Size = Size::new(50.0, 30.0);

/// Computed frames for one presentation of the switch.
///
/// Content regions are the areas not covered by the resting thumb: the
/// on-side content sits left of the thumb's on position and the off-side
/// content sits right of its off position. Hosts crossfade their alphas as
/// the side changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwitchFrames {
    /// Full-bounds background frame.
    pub background: Rect,
    /// Corner radius of the background.
    pub background_radius: f64,
    /// Thumb frame for the requested side and width variant.
    pub thumb: Rect,
    /// Corner radius of the thumb.
    pub thumb_radius: f64,
    /// Region holding on-side labels or images.
    pub on_content: Rect,
    /// Region holding off-side labels or images.
    pub off_content: Rect,
}

impl SwitchFrames {
    /// Computes the frames for one presentation.
    ///
    /// `bounds` is the control's frame in its host's coordinate space;
    /// `rounded` selects pill-shaped corners (half the control height)
    /// versus the square radius from `metrics`.
    #[must_use]
    pub fn compute(
        bounds: Rect,
        side: Side,
        width: ThumbWidth,
        rounded: bool,
        metrics: &Metrics,
    ) -> Self {
        let h = bounds.height();
        let inset = metrics.thumb_inset;

        let thumb_h = h - 2.0 * inset;
        let thumb_w = match width {
            ThumbWidth::Resting => thumb_h,
            ThumbWidth::Tracking => thumb_h + metrics.tracking_extra,
        };
        let thumb_x = match side {
            Side::Off => bounds.x0 + inset,
            Side::On => bounds.x1 - (thumb_w + inset),
        };
        let thumb_y = bounds.y0 + inset;
        let thumb = Rect::new(thumb_x, thumb_y, thumb_x + thumb_w, thumb_y + thumb_h);

        let (background_radius, thumb_radius) = if rounded {
            (h * 0.5, h * 0.5 - inset)
        } else {
            (metrics.square_radius, metrics.square_radius)
        };

        // Content regions exclude a thumb-sized square at the near edge.
        let on_content = Rect::new(bounds.x0, bounds.y0, bounds.x1 - h, bounds.y1);
        let off_content = Rect::new(bounds.x0 + h, bounds.y0, bounds.x1, bounds.y1);

        Self {
            background: bounds,
            background_radius,
            thumb,
            thumb_radius,
            on_content,
            off_content,
        }
    }

    /// The background as a rounded rectangle.
    #[must_use]
    pub fn background_rounded(&self) -> RoundedRect {
        self.background.to_rounded_rect(self.background_radius)
    }

    /// The thumb as a rounded rectangle, also usable as its shadow path.
    #[must_use]
    pub fn thumb_rounded(&self) -> RoundedRect {
        self.thumb.to_rounded_rect(self.thumb_radius)
    }
}
