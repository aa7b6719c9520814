// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumbler Style: visual configuration for the switch.
//!
//! The switch core decides *what* to show (a side and a thumb width); this
//! crate decides which colors that presentation uses. All visual constants
//! live in one [`Palette`] with documented defaults, injected into the host
//! renderer at construction. [`Palette::resolve`] computes the complete
//! color set for a presentation in one step, so there is no ordering
//! subtlety between dependent properties: change a palette field, resolve,
//! and apply.
//!
//! ```
//! use tumbler_style::Palette;
//! use tumbler_switch::{Side, ThumbWidth};
//!
//! let palette = Palette::default();
//!
//! // Off at rest shows the transparent inactive background.
//! let resting = palette.resolve(Side::Off, ThumbWidth::Resting);
//! assert_eq!(resting.background, palette.inactive);
//!
//! // Off while tracking shows the active press feedback instead.
//! let tracking = palette.resolve(Side::Off, ThumbWidth::Tracking);
//! assert_eq!(tracking.background, palette.active);
//! ```

#![no_std]

use peniko::Color;
use tumbler_switch::{Side, ThumbWidth};

/// Drop-shadow description for the thumb.
///
/// The shadow path itself follows the thumb's rounded rectangle; renderers
/// tween it together with the thumb frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThumbShadow {
    /// Shadow offset along the X axis.
    pub dx: f32,
    /// Shadow offset along the Y axis.
    pub dy: f32,
    /// Blur standard deviation.
    pub std_deviation: f32,
    /// Shadow color, including its alpha.
    pub color: Color,
}

impl Default for ThumbShadow {
    fn default() -> Self {
        Self {
            dx: 0.0,
            dy: 3.0,
            std_deviation: 2.0,
            color: Color::from_rgba8(128, 128, 128, 128),
        }
    }
}

/// The switch's color palette, with reference defaults.
///
/// Every color the renderer needs is a field here. The `on_thumb` color is
/// optional: when unset, the thumb keeps its off-state color while on, which
/// is the reference behavior unless a caller opts into a distinct on-state
/// thumb.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Background fill while on. Default: green.
    pub on_tint: Color,
    /// Background fill while off and actively being touched. Default:
    /// light gray.
    pub active: Color,
    /// Background fill while off at rest. Default: transparent.
    pub inactive: Color,
    /// Border color while off. Default: light gray.
    pub border: Color,
    /// Thumb fill. Default: white.
    pub thumb: Color,
    /// Thumb fill while on, when distinct from `thumb`.
    pub on_thumb: Option<Color>,
    /// Tint of the on/off labels. Default: light gray.
    pub content: Color,
    /// Thumb drop shadow.
    pub shadow: ThumbShadow,
}

impl Palette {
    const DEFAULT: Self = Self {
        on_tint: Color::from_rgb8(77, 217, 99),
        active: Color::from_rgb8(227, 227, 227),
        inactive: Color::TRANSPARENT,
        border: Color::from_rgb8(199, 199, 204),
        thumb: Color::WHITE,
        on_thumb: None,
        content: Color::from_rgb8(170, 170, 170),
        shadow: ThumbShadow {
            dx: 0.0,
            dy: 3.0,
            std_deviation: 2.0,
            color: Color::from_rgba8(128, 128, 128, 128),
        },
    };

    /// Resolves the complete color set for one presentation.
    ///
    /// The on side always shows `on_tint` for both background and border.
    /// The off side distinguishes press feedback (`active`) from rest
    /// (`inactive`). Content alphas crossfade so only the current side's
    /// label or image is visible.
    #[must_use]
    pub fn resolve(&self, side: Side, width: ThumbWidth) -> ResolvedColors {
        match side {
            Side::On => ResolvedColors {
                background: self.on_tint,
                border: self.on_tint,
                thumb: self.on_thumb.unwrap_or(self.thumb),
                on_content_alpha: 1.0,
                off_content_alpha: 0.0,
            },
            Side::Off => ResolvedColors {
                background: match width {
                    ThumbWidth::Tracking => self.active,
                    ThumbWidth::Resting => self.inactive,
                },
                border: self.border,
                thumb: self.thumb,
                on_content_alpha: 0.0,
                off_content_alpha: 1.0,
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors resolved for one presentation of the switch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedColors {
    /// Background fill.
    pub background: Color,
    /// Background border color.
    pub border: Color,
    /// Thumb fill.
    pub thumb: Color,
    /// Alpha of the on-side content region.
    pub on_content_alpha: f32,
    /// Alpha of the off-side content region.
    pub off_content_alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_side_uses_tint_for_background_and_border() {
        let palette = Palette::default();
        for width in [ThumbWidth::Resting, ThumbWidth::Tracking] {
            let colors = palette.resolve(Side::On, width);
            assert_eq!(colors.background, palette.on_tint);
            assert_eq!(colors.border, palette.on_tint);
            assert_eq!(colors.on_content_alpha, 1.0);
            assert_eq!(colors.off_content_alpha, 0.0);
        }
    }

    #[test]
    fn off_side_distinguishes_press_feedback_from_rest() {
        let palette = Palette::default();

        let resting = palette.resolve(Side::Off, ThumbWidth::Resting);
        assert_eq!(resting.background, palette.inactive);
        assert_eq!(resting.border, palette.border);

        let tracking = palette.resolve(Side::Off, ThumbWidth::Tracking);
        assert_eq!(tracking.background, palette.active);
        assert_eq!(tracking.border, palette.border);
        assert_eq!(tracking.off_content_alpha, 1.0);
    }

    #[test]
    fn on_thumb_falls_back_to_thumb_when_unset() {
        let palette = Palette::default();
        assert_eq!(palette.resolve(Side::On, ThumbWidth::Resting).thumb, palette.thumb);

        let custom = Palette {
            on_thumb: Some(Color::from_rgb8(10, 20, 30)),
            ..Palette::default()
        };
        assert_eq!(
            custom.resolve(Side::On, ThumbWidth::Resting).thumb,
            Color::from_rgb8(10, 20, 30)
        );
        // The off side never uses the on-thumb color.
        assert_eq!(custom.resolve(Side::Off, ThumbWidth::Resting).thumb, custom.thumb);
    }

    #[test]
    fn default_shadow_matches_reference_constants() {
        let shadow = ThumbShadow::default();
        assert_eq!(shadow.dx, 0.0);
        assert_eq!(shadow.dy, 3.0);
        assert_eq!(shadow.std_deviation, 2.0);
    }
}
