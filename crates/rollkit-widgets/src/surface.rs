#![forbid(unsafe_code)]

//! Rendering seam between the carousel and the host.
//!
//! The carousel never draws. It tells a [`TransitionSurface`] which effect to
//! play on which child and moves on; the surface owns the actual animation.
//! A surface that receives a new `play` for a target already in motion is
//! expected to replace the running animation, so at most one swap is ever in
//! flight.

use std::time::Duration;

use rollkit_core::Effect;

/// Host capability for showing children and playing effects on them.
pub trait TransitionSurface<V> {
    /// Start `effect` on `target`, lasting `duration`. Fire-and-forget.
    fn play(&mut self, effect: Effect, duration: Duration, target: &V);

    /// Show `view` without animation (initial population).
    fn render(&mut self, view: &V);
}

impl<V, S: TransitionSurface<V> + ?Sized> TransitionSurface<V> for Box<S> {
    fn play(&mut self, effect: Effect, duration: Duration, target: &V) {
        (**self).play(effect, duration, target);
    }

    fn render(&mut self, view: &V) {
        (**self).render(view);
    }
}

impl<V, S: TransitionSurface<V> + ?Sized> TransitionSurface<V> for &mut S {
    fn play(&mut self, effect: Effect, duration: Duration, target: &V) {
        (**self).play(effect, duration, target);
    }

    fn render(&mut self, view: &V) {
        (**self).render(view);
    }
}

/// A surface that ignores every call.
///
/// Useful for hosts that draw from
/// [`Carousel::active_transition`](crate::Carousel::active_transition)
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl<V> TransitionSurface<V> for NullSurface {
    fn play(&mut self, _effect: Effect, _duration: Duration, _target: &V) {}

    fn render(&mut self, _view: &V) {}
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall<V> {
    /// `play(effect, duration, target)`.
    Play {
        effect: Effect,
        duration: Duration,
        target: V,
    },
    /// `render(view)`.
    Render(V),
}

/// A surface that records every call, for tests and headless hosts.
#[derive(Debug, Clone)]
pub struct RecordingSurface<V> {
    calls: Vec<SurfaceCall<V>>,
}

impl<V> Default for RecordingSurface<V> {
    fn default() -> Self {
        Self { calls: Vec::new() }
    }
}

impl<V> RecordingSurface<V> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in arrival order.
    pub fn calls(&self) -> &[SurfaceCall<V>] {
        &self.calls
    }

    /// `(effect, target)` of every `play` call, in order.
    pub fn plays(&self) -> Vec<(Effect, &V)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Play { effect, target, .. } => Some((*effect, target)),
                SurfaceCall::Render(_) => None,
            })
            .collect()
    }

    /// Target of every `render` call, in order.
    pub fn renders(&self) -> Vec<&V> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Render(view) => Some(view),
                SurfaceCall::Play { .. } => None,
            })
            .collect()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<SurfaceCall<V>> {
        std::mem::take(&mut self.calls)
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl<V: Clone> TransitionSurface<V> for RecordingSurface<V> {
    fn play(&mut self, effect: Effect, duration: Duration, target: &V) {
        self.calls.push(SurfaceCall::Play {
            effect,
            duration,
            target: target.clone(),
        });
    }

    fn render(&mut self, view: &V) {
        self.calls.push(SurfaceCall::Render(view.clone()));
    }
}
