#![forbid(unsafe_code)]

//! Orientation to transition mapping.
//!
//! | Orientation | enter | exit |
//! |-------------|-------|------|
//! | `TopToBottom` | `SlideInFromTop` | `SlideOutToBottom` |
//! | `BottomToTop` | `SlideInFromBottom` | `SlideOutToTop` |
//! | `LeftToRight` | `SlideInFromLeft` | `SlideOutToRight` |
//! | `RightToLeft` | `SlideInFromRight` | `SlideOutToLeft` |
//!
//! # Invariants
//!
//! 1. The mapping is total over [`Orientation`] and fixed at compile time.
//! 2. Both effects of a pair move content the same way, so the two children
//!    travel together.
//! 3. `select(o.reversed(), d) == select(o, d).mirrored()`.

use std::time::Duration;

use crate::effect::Effect;
use crate::orientation::Orientation;

/// The enter/exit pair plus the shared animation duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionSpec {
    /// Effect applied to the incoming child.
    pub enter: Effect,
    /// Effect applied to the outgoing child.
    pub exit: Effect,
    /// Duration of both effects.
    pub duration: Duration,
}

impl TransitionSpec {
    /// The same pair travelling the opposite direction.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            enter: self.enter.mirrored(),
            exit: self.exit.mirrored(),
            duration: self.duration,
        }
    }

    /// Whether the pair plays as an instant cut.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Stateless mapping from [`Orientation`] to [`TransitionSpec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionSelector;

impl TransitionSelector {
    /// Pick the effect pair for `orientation`, both lasting `each_time`.
    #[must_use]
    pub const fn select(orientation: Orientation, each_time: Duration) -> TransitionSpec {
        let (enter, exit) = Self::pair(orientation);
        TransitionSpec {
            enter,
            exit,
            duration: each_time,
        }
    }

    /// The (enter, exit) effects for `orientation`.
    #[must_use]
    pub const fn pair(orientation: Orientation) -> (Effect, Effect) {
        match orientation {
            Orientation::TopToBottom => (Effect::SlideInFromTop, Effect::SlideOutToBottom),
            Orientation::BottomToTop => (Effect::SlideInFromBottom, Effect::SlideOutToTop),
            Orientation::LeftToRight => (Effect::SlideInFromLeft, Effect::SlideOutToRight),
            Orientation::RightToLeft => (Effect::SlideInFromRight, Effect::SlideOutToLeft),
        }
    }
}
