#![forbid(unsafe_code)]

//! Named slide effects and their geometry.
//!
//! An [`Effect`] is one half of a transition: the motion applied to either the
//! incoming (enter) or the outgoing (exit) child. Effects carry no duration;
//! the duration lives on [`TransitionSpec`](crate::TransitionSpec).
//!
//! # Geometry
//!
//! Offsets are measured in cells relative to the child's resting position,
//! with `+y` pointing down and `+x` pointing right. Enter effects travel from
//! one full extent away to `0`; exit effects travel from `0` to one full
//! extent away. Progress is eased with [`ease_out`].
//!
//! # Invariants
//!
//! 1. `offset_at(1.0, _)` of every enter effect is the origin.
//! 2. `offset_at(0.0, _)` of every exit effect is the origin.
//! 3. `mirrored()` is an involution and preserves enter/exit.

use std::fmt;

/// A 2-D cell offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i16,
    pub dy: i16,
}

impl Offset {
    /// The resting position.
    pub const ORIGIN: Self = Self { dx: 0, dy: 0 };

    /// Create an offset.
    #[must_use]
    pub const fn new(dx: i16, dy: i16) -> Self {
        Self { dx, dy }
    }
}

/// A directional enter or exit motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// Incoming child descends from above.
    SlideInFromTop,
    /// Outgoing child leaves through the bottom edge.
    SlideOutToBottom,
    /// Incoming child rises from below.
    SlideInFromBottom,
    /// Outgoing child leaves through the top edge.
    SlideOutToTop,
    /// Incoming child arrives from the left.
    SlideInFromLeft,
    /// Outgoing child leaves through the right edge.
    SlideOutToRight,
    /// Incoming child arrives from the right.
    SlideInFromRight,
    /// Outgoing child leaves through the left edge.
    SlideOutToLeft,
}

impl Effect {
    /// Whether this effect animates the incoming child.
    #[must_use]
    pub const fn is_enter(self) -> bool {
        matches!(
            self,
            Self::SlideInFromTop
                | Self::SlideInFromBottom
                | Self::SlideInFromLeft
                | Self::SlideInFromRight
        )
    }

    /// The same kind of motion along the opposite direction.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::SlideInFromTop => Self::SlideInFromBottom,
            Self::SlideInFromBottom => Self::SlideInFromTop,
            Self::SlideOutToBottom => Self::SlideOutToTop,
            Self::SlideOutToTop => Self::SlideOutToBottom,
            Self::SlideInFromLeft => Self::SlideInFromRight,
            Self::SlideInFromRight => Self::SlideInFromLeft,
            Self::SlideOutToRight => Self::SlideOutToLeft,
            Self::SlideOutToLeft => Self::SlideOutToRight,
        }
    }

    /// Start and end positions in units of the viewport extent.
    const fn endpoints(self) -> ((i8, i8), (i8, i8)) {
        match self {
            Self::SlideInFromTop => ((0, -1), (0, 0)),
            Self::SlideOutToBottom => ((0, 0), (0, 1)),
            Self::SlideInFromBottom => ((0, 1), (0, 0)),
            Self::SlideOutToTop => ((0, 0), (0, -1)),
            Self::SlideInFromLeft => ((-1, 0), (0, 0)),
            Self::SlideOutToRight => ((0, 0), (1, 0)),
            Self::SlideInFromRight => ((1, 0), (0, 0)),
            Self::SlideOutToLeft => ((0, 0), (-1, 0)),
        }
    }

    /// Offset of the target at `progress` (clamped to `[0, 1]`) for a
    /// viewport `extent` cells long along the slide axis.
    #[must_use]
    pub fn offset_at(self, progress: f32, extent: i16) -> Offset {
        let t = ease_out(progress);
        let ((fx, fy), (tx, ty)) = self.endpoints();
        let extent = f32::from(extent);
        let lerp = |from: i8, to: i8| -> i16 {
            let a = f32::from(from) * extent;
            let b = f32::from(to) * extent;
            (a + (b - a) * t).round() as i16
        };
        Offset::new(lerp(fx, tx), lerp(fy, ty))
    }

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SlideInFromTop => "slide_in_from_top",
            Self::SlideOutToBottom => "slide_out_to_bottom",
            Self::SlideInFromBottom => "slide_in_from_bottom",
            Self::SlideOutToTop => "slide_out_to_top",
            Self::SlideInFromLeft => "slide_in_from_left",
            Self::SlideOutToRight => "slide_out_to_right",
            Self::SlideInFromRight => "slide_in_from_right",
            Self::SlideOutToLeft => "slide_out_to_left",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
