#![forbid(unsafe_code)]

//! Self-advancing carousel.
//!
//! A [`Carousel`] owns an ordered list of children and shows one at a time.
//! While running, every `pause` of host time it slides the next child in
//! with the effect pair chosen by its [`Orientation`], then notifies change
//! listeners. Taps on the visible child are forwarded to click listeners.
//!
//! # Example
//!
//! ```ignore
//! let mut carousel = Carousel::new(RecordingSurface::new());
//! carousel.configure(Orientation::BottomToTop, 300, 1000)?;
//! carousel.set_children(["A", "B", "C"]);
//! carousel.add_change_listener(|ev, _| println!("{} / {}", ev.displayed, ev.total));
//! carousel.start();
//!
//! // In the host loop:
//! carousel.tick(frame_dt);
//! ```
//!
//! # State machine
//!
//! | Phase | Meaning |
//! |-------|---------|
//! | `Idle` | no children |
//! | `Stopped` | children, timer not armed |
//! | `Running` | children, timer armed |
//!
//! # Invariants
//!
//! 1. `current_index()` is `Some(i)` with `i < len()` iff `len() > 0`.
//! 2. `is_running()` iff a [`TimerHandle`] exists.
//! 3. Repopulation resets the index to 0 and preserves running-ness.
//! 4. Change listeners observe the post-advance index.
//! 5. At most one transition is in flight; a new advance replaces it.
//!
//! # Failure Modes
//!
//! - Negative timing: rejected by `configure`, nothing changes.
//! - Listener panic: the index has already moved and all listeners stay
//!   registered; the panic unwinds to the caller.

use std::fmt;
use std::time::Duration;

use rollkit_core::{
    CarouselConfig, Offset, Orientation, Result, Timing, TransitionSelector, TransitionSpec,
};
use rollkit_runtime::Tickable;

use crate::listener::{
    CarouselControl, ChangeEvent, ChangeListener, ClickEvent, ClickListener, ListenerId,
    Listeners, RunRequest,
};
use crate::surface::TransitionSurface;
use crate::timer::TimerHandle;

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

/// A child view and its display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry<V> {
    /// Dense 0-based position, assigned at population.
    pub index: usize,
    /// The host's view.
    pub view: V,
}

/// A fixed-size source of child views.
pub trait ChildProvider<V> {
    /// Number of views.
    fn len(&self) -> usize;

    /// Produce the view at `index` (`index < len()`).
    fn view(&self, index: usize) -> V;

    /// Whether the provider has no views.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> ChildProvider<V> for [V] {
    fn len(&self) -> usize {
        <[V]>::len(self)
    }

    fn view(&self, index: usize) -> V {
        self[index].clone()
    }
}

impl<V: Clone> ChildProvider<V> for Vec<V> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn view(&self, index: usize) -> V {
        self[index].clone()
    }
}

// ---------------------------------------------------------------------------
// Phase & in-flight transition
// ---------------------------------------------------------------------------

/// Coarse lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselPhase {
    /// No children.
    Idle,
    /// Children present, timer not armed.
    Stopped,
    /// Children present, timer armed.
    Running,
}

/// The swap currently animating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTransition {
    spec: TransitionSpec,
    from: usize,
    to: usize,
    elapsed: Duration,
}

impl ActiveTransition {
    fn new(spec: TransitionSpec, from: usize, to: usize) -> Self {
        Self {
            spec,
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    /// Effects and duration being played.
    #[must_use]
    pub const fn spec(&self) -> TransitionSpec {
        self.spec
    }

    /// Index of the outgoing child.
    #[must_use]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Index of the incoming child.
    #[must_use]
    pub const fn to(&self) -> usize {
        self.to
    }

    /// Linear progress in `[0, 1]`. Instant transitions are always complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.spec.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Whether the animation has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.spec.duration
    }

    /// Current offset of the incoming child for a viewport `extent` cells
    /// long along the slide axis.
    #[must_use]
    pub fn enter_offset(&self, extent: i16) -> Offset {
        self.spec.enter.offset_at(self.progress(), extent)
    }

    /// Current offset of the outgoing child.
    #[must_use]
    pub fn exit_offset(&self, extent: i16) -> Offset {
        self.spec.exit.offset_at(self.progress(), extent)
    }

    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Timer-driven carousel over views of type `V`, animated through `S`.
pub struct Carousel<V, S> {
    surface: S,
    children: Vec<ChildEntry<V>>,
    current: Option<usize>,
    orientation: Orientation,
    timing: Timing,
    transition: TransitionSpec,
    timer: Option<TimerHandle>,
    active: Option<ActiveTransition>,
    change_listeners: Listeners<ChangeListener>,
    click_listeners: Listeners<ClickListener<V>>,
    next_listener_id: u64,
}

impl<V, S> fmt::Debug for Carousel<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.children.len())
            .field("current", &self.current)
            .field("orientation", &self.orientation)
            .field("timing", &self.timing)
            .field("timer", &self.timer)
            .field("active", &self.active)
            .field("change_listeners", &self.change_listeners)
            .field("click_listeners", &self.click_listeners)
            .finish_non_exhaustive()
    }
}

impl<V, S: TransitionSurface<V>> Carousel<V, S> {
    /// Create an idle carousel with default orientation and timing.
    pub fn new(surface: S) -> Self {
        Self::with_timing(surface, Orientation::default(), Timing::default())
    }

    /// Create an idle carousel with validated settings.
    pub fn with_timing(surface: S, orientation: Orientation, timing: Timing) -> Self {
        Self {
            surface,
            children: Vec::new(),
            current: None,
            orientation,
            timing,
            transition: TransitionSelector::select(orientation, timing.each_time()),
            timer: None,
            active: None,
            change_listeners: Listeners::default(),
            click_listeners: Listeners::default(),
            next_listener_id: 0,
        }
    }

    /// Create an idle carousel from a raw configuration.
    pub fn with_config(surface: S, config: &CarouselConfig) -> Result<Self> {
        let timing = config.timing()?;
        Ok(Self::with_timing(surface, config.orientation, timing))
    }

    // --- Configuration -----------------------------------------------------

    /// Set orientation, each-time and pause together.
    ///
    /// Negative values are rejected and leave the carousel untouched. A
    /// running timer keeps its current period until it next fires.
    pub fn configure(
        &mut self,
        orientation: Orientation,
        each_time_ms: i64,
        pause_ms: i64,
    ) -> Result<()> {
        let timing = Timing::from_millis(each_time_ms, pause_ms)?;
        self.apply(orientation, timing);
        Ok(())
    }

    /// Apply a raw configuration. Same semantics as [`Carousel::configure`].
    pub fn apply_config(&mut self, config: &CarouselConfig) -> Result<()> {
        let timing = config.timing()?;
        self.apply(config.orientation, timing);
        Ok(())
    }

    /// Change only the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.apply(orientation, self.timing);
    }

    /// Change only the animation duration.
    pub fn set_each_time(&mut self, each_time: Duration) {
        self.apply(self.orientation, self.timing.with_each_time(each_time));
    }

    /// Change only the timer period.
    pub fn set_pause(&mut self, pause: Duration) {
        self.apply(self.orientation, self.timing.with_pause(pause));
    }

    fn apply(&mut self, orientation: Orientation, timing: Timing) {
        self.orientation = orientation;
        self.timing = timing;
        self.transition = TransitionSelector::select(orientation, timing.each_time());
        tracing::debug!(
            %orientation,
            each_time_ms = timing.each_time().as_millis() as u64,
            pause_ms = timing.pause().as_millis() as u64,
            "Carousel configured"
        );
    }

    // --- Population --------------------------------------------------------

    /// Replace all children. The first child (if any) becomes visible.
    pub fn set_children<I: IntoIterator<Item = V>>(&mut self, views: I) {
        self.children = views
            .into_iter()
            .enumerate()
            .map(|(index, view)| ChildEntry { index, view })
            .collect();
        self.current = if self.children.is_empty() {
            None
        } else {
            Some(0)
        };
        self.active = None;
        if let Some(first) = self.children.first() {
            self.surface.render(&first.view);
        }
        tracing::debug!(
            len = self.children.len(),
            running = self.is_running(),
            "Carousel repopulated"
        );
    }

    /// Replace all children with the views of `provider`.
    pub fn set_provider<P: ChildProvider<V> + ?Sized>(&mut self, provider: &P) {
        self.set_children((0..provider.len()).map(|i| provider.view(i)));
    }

    // --- Run state ---------------------------------------------------------

    /// Arm the auto-advance timer. No-op if already running.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }
        self.timer = Some(TimerHandle::arm(self.timing.pause()));
        tracing::debug!(
            pause_ms = self.timing.pause().as_millis() as u64,
            len = self.children.len(),
            "Carousel started"
        );
    }

    /// Cancel the auto-advance timer. No-op if not running.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!(current = ?self.current, "Carousel stopped");
        }
    }

    /// Feed `dt` of host time: progress the in-flight transition, then the
    /// timer. Advances at most once per call.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(active) = &mut self.active {
            active.tick(dt);
            if active.is_complete() {
                self.active = None;
            }
        }

        let pause = self.timing.pause();
        let fired = self
            .timer
            .as_mut()
            .is_some_and(|timer| timer.poll(dt, pause));
        if fired {
            tracing::trace!(current = ?self.current, "Timer fired");
            self.advance();
        }
    }

    /// Show the next child (wrapping) and notify change listeners.
    ///
    /// Returns the new index, or `None` on an empty carousel.
    pub fn advance(&mut self) -> Option<usize> {
        let previous = self.current?;
        let total = self.children.len();
        let next = (previous + 1) % total;
        let spec = self.transition;

        self.surface
            .play(spec.exit, spec.duration, &self.children[previous].view);
        self.surface
            .play(spec.enter, spec.duration, &self.children[next].view);
        self.current = Some(next);
        if let Some(replaced) = self.active.replace(ActiveTransition::new(spec, previous, next)) {
            tracing::trace!(
                from = replaced.from,
                to = replaced.to,
                "Replaced in-flight transition"
            );
        }

        let event = ChangeEvent {
            previous,
            displayed: next,
            total,
        };
        self.dispatch_change(&event);
        Some(next)
    }

    fn dispatch_change(&mut self, event: &ChangeEvent) {
        if self.change_listeners.is_empty() {
            return;
        }
        let _span = tracing::debug_span!(
            "carousel_change",
            displayed = event.displayed,
            total = event.total,
            listeners = self.change_listeners.len()
        )
        .entered();

        let mut control = CarouselControl::new(self.is_running());
        for listener in self.change_listeners.iter_mut() {
            listener(event, &mut control);
        }
        self.apply_control(control);
    }

    /// Forward a tap on the visible child to click listeners.
    ///
    /// Returns `true` if at least one listener was called.
    pub fn on_click_visible(&mut self) -> bool {
        let Some(position) = self.current else {
            return false;
        };
        if self.click_listeners.is_empty() {
            return false;
        }
        let _span = tracing::debug_span!(
            "carousel_click",
            position,
            listeners = self.click_listeners.len()
        )
        .entered();

        let mut control = CarouselControl::new(self.timer.is_some());
        let event = ClickEvent {
            view: &self.children[position].view,
            position,
            total: self.children.len(),
        };
        for listener in self.click_listeners.iter_mut() {
            listener(&event, &mut control);
        }
        self.apply_control(control);
        true
    }

    fn apply_control(&mut self, control: CarouselControl) {
        match control.request() {
            Some(RunRequest::Start) => self.start(),
            Some(RunRequest::Stop) => self.stop(),
            None => {}
        }
    }

    // --- Listeners ---------------------------------------------------------

    fn allocate_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        id
    }

    /// Register a change listener after any existing ones.
    pub fn add_change_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent, &mut CarouselControl) + 'static,
    {
        let id = self.allocate_listener_id();
        self.change_listeners.push(id, Box::new(listener));
        id
    }

    /// Register a click listener after any existing ones.
    pub fn add_click_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'a> FnMut(&ClickEvent<'a, V>, &mut CarouselControl) + 'static,
    {
        let id = self.allocate_listener_id();
        self.click_listeners.push(id, Box::new(listener));
        id
    }

    /// Replace every change listener with `listener`.
    pub fn set_change_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent, &mut CarouselControl) + 'static,
    {
        self.change_listeners.clear();
        self.add_change_listener(listener)
    }

    /// Replace every click listener with `listener`.
    pub fn set_click_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'a> FnMut(&ClickEvent<'a, V>, &mut CarouselControl) + 'static,
    {
        self.click_listeners.clear();
        self.add_click_listener(listener)
    }

    /// Remove one listener of either kind. Returns `false` if unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.change_listeners.remove(id) || self.click_listeners.remove(id)
    }

    /// Remove every listener.
    pub fn clear_listeners(&mut self) {
        self.change_listeners.clear();
        self.click_listeners.clear();
    }

    // --- Queries -----------------------------------------------------------

    /// Index of the visible child.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The visible child.
    #[must_use]
    pub fn current_view(&self) -> Option<&V> {
        self.current.map(|i| &self.children[i].view)
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in display order.
    #[must_use]
    pub fn children(&self) -> &[ChildEntry<V>] {
        &self.children
    }

    /// Whether the timer is armed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The armed timer, if running.
    #[must_use]
    pub const fn timer(&self) -> Option<&TimerHandle> {
        self.timer.as_ref()
    }

    /// Coarse lifecycle state.
    #[must_use]
    pub fn phase(&self) -> CarouselPhase {
        match (self.children.is_empty(), self.timer.is_some()) {
            (true, _) => CarouselPhase::Idle,
            (false, false) => CarouselPhase::Stopped,
            (false, true) => CarouselPhase::Running,
        }
    }

    /// Slide orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current timing.
    #[must_use]
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Effect pair that the next advance will play.
    #[must_use]
    pub const fn transition(&self) -> TransitionSpec {
        self.transition
    }

    /// The swap still animating, if any.
    #[must_use]
    pub const fn active_transition(&self) -> Option<&ActiveTransition> {
        self.active.as_ref()
    }

    /// The rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<V, S: TransitionSurface<V>> Tickable for Carousel<V, S> {
    fn tick(&mut self, dt: Duration) {
        Carousel::tick(self, dt);
    }

    fn wants_ticks(&self) -> bool {
        self.timer.is_some() || self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use rollkit_core::{CarouselError, Effect};
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestCarousel = Carousel<&'static str, RecordingSurface<&'static str>>;

    const SEC: Duration = Duration::from_secs(1);

    fn carousel() -> TestCarousel {
        Carousel::new(RecordingSurface::new())
    }

    fn abc() -> TestCarousel {
        let mut c = carousel();
        c.set_children(["A", "B", "C"]);
        c
    }

    fn record_changes(c: &mut TestCarousel) -> Rc<RefCell<Vec<(usize, usize)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        c.add_change_listener(move |ev, _| sink.borrow_mut().push((ev.displayed, ev.total)));
        log
    }

    // --- Construction ------------------------------------------------------

    #[test]
    fn new_is_idle_with_defaults() {
        let c = carousel();
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.current_index(), None);
        assert_eq!(c.orientation(), Orientation::BottomToTop);
        assert_eq!(c.timing(), Timing::default());
        assert_eq!(c.transition().enter, Effect::SlideInFromBottom);
        assert!(!c.is_running());
    }

    #[test]
    fn with_config_rejects_negative() {
        let config = CarouselConfig::default().each_time_ms(-1);
        let err = TestCarousel::with_config(RecordingSurface::new(), &config).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InvalidConfiguration {
                field: "each_time_ms",
                ..
            }
        ));
    }

    // --- Population --------------------------------------------------------

    #[test]
    fn set_children_assigns_dense_indices_and_renders_first() {
        let c = abc();
        let indices: Vec<_> = c.children().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.current_view(), Some(&"A"));
        assert_eq!(c.surface().renders(), vec![&"A"]);
        assert_eq!(c.phase(), CarouselPhase::Stopped);
    }

    #[test]
    fn set_children_empty_goes_idle() {
        let mut c = abc();
        c.start();
        c.set_children([]);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.current_index(), None);
        assert!(c.is_running(), "running-ness is preserved");
    }

    #[test]
    fn set_children_resets_index_and_preserves_running() {
        let mut c = abc();
        c.start();
        c.advance();
        c.advance();
        assert_eq!(c.current_index(), Some(2));

        c.set_children(["X", "Y"]);
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.phase(), CarouselPhase::Running);
        assert!(c.active_transition().is_none());
    }

    #[test]
    fn set_provider_matches_set_children() {
        let mut c = carousel();
        let views = vec!["p", "q"];
        c.set_provider(&views);
        assert_eq!(c.len(), 2);
        assert_eq!(c.children()[1].view, "q");

        c.set_provider(&views[..1]);
        assert_eq!(c.len(), 1);
    }

    // --- Advance -----------------------------------------------------------

    #[test]
    fn advance_cycles_with_period_n() {
        let mut c = abc();
        let seq: Vec<_> = (0..6).map(|_| c.advance().unwrap()).collect();
        assert_eq!(seq, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn advance_on_empty_is_noop() {
        let mut c = carousel();
        let log = record_changes(&mut c);
        assert_eq!(c.advance(), None);
        assert_eq!(c.current_index(), None);
        assert!(log.borrow().is_empty());
        assert!(c.surface().calls().is_empty());
    }

    #[test]
    fn advance_plays_exit_then_enter() {
        let mut c = abc();
        c.configure(Orientation::BottomToTop, 300, 1000).unwrap();
        c.surface_mut().clear();
        c.advance();
        assert_eq!(
            c.surface().calls(),
            &[
                SurfaceCall::Play {
                    effect: Effect::SlideOutToTop,
                    duration: Duration::from_millis(300),
                    target: "A"
                },
                SurfaceCall::Play {
                    effect: Effect::SlideInFromBottom,
                    duration: Duration::from_millis(300),
                    target: "B"
                },
            ]
        );
    }

    #[test]
    fn listener_observes_new_index() {
        let mut c = abc();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        c.add_change_listener(move |ev, _| *sink.borrow_mut() = Some(*ev));
        c.advance();
        assert_eq!(
            *seen.borrow(),
            Some(ChangeEvent {
                previous: 0,
                displayed: 1,
                total: 3
            })
        );
    }

    #[test]
    fn single_child_stays_put() {
        let mut c = carousel();
        c.set_children(["only"]);
        let log = record_changes(&mut c);
        assert_eq!(c.advance(), Some(0));
        assert_eq!(*log.borrow(), vec![(0, 1)]);
    }

    // --- Timer -------------------------------------------------------------

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut c = abc();
        c.start();
        c.tick(Duration::from_millis(400));
        c.start();
        assert_eq!(c.timer().unwrap().elapsed(), Duration::from_millis(400));

        c.stop();
        c.stop();
        assert!(!c.is_running());
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn tick_advances_once_per_pause() {
        let mut c = abc();
        let log = record_changes(&mut c);
        c.start();
        c.tick(Duration::from_millis(999));
        assert!(log.borrow().is_empty());
        c.tick(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec![(1, 3)]);
    }

    #[test]
    fn stopped_carousel_ignores_ticks() {
        let mut c = abc();
        c.tick(SEC * 10);
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn running_empty_carousel_ticks_harmlessly() {
        let mut c = carousel();
        let log = record_changes(&mut c);
        c.start();
        c.tick(SEC * 3);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn pause_change_applies_after_next_fire() {
        let mut c = abc();
        let log = record_changes(&mut c);
        c.start();
        c.set_pause(Duration::from_millis(100));

        c.tick(Duration::from_millis(500));
        assert!(log.borrow().is_empty(), "old period still armed");
        c.tick(Duration::from_millis(500));
        assert_eq!(log.borrow().len(), 1);
        c.tick(Duration::from_millis(100));
        assert_eq!(log.borrow().len(), 2);
    }

    // --- Transitions -------------------------------------------------------

    #[test]
    fn active_transition_progresses_and_clears() {
        let mut c = abc();
        c.set_each_time(Duration::from_millis(200));
        c.advance();
        let active = *c.active_transition().unwrap();
        assert_eq!((active.from(), active.to()), (0, 1));
        assert_eq!(active.progress(), 0.0);
        assert_eq!(active.enter_offset(10), Offset::new(0, 10));

        c.tick(Duration::from_millis(100));
        let half = c.active_transition().unwrap().progress();
        assert!((half - 0.5).abs() < 1e-6);

        c.tick(Duration::from_millis(100));
        assert!(c.active_transition().is_none());
    }

    #[test]
    fn new_advance_replaces_in_flight_transition() {
        let mut c = abc();
        c.advance();
        c.tick(Duration::from_millis(100));
        c.advance();
        let active = c.active_transition().unwrap();
        assert_eq!((active.from(), active.to()), (1, 2));
        assert_eq!(active.progress(), 0.0);
    }

    #[test]
    fn zero_each_time_is_instant_cut() {
        let mut c = abc();
        c.configure(Orientation::LeftToRight, 0, 1000).unwrap();
        c.advance();
        let active = c.active_transition().unwrap();
        assert!(active.is_complete());
        assert_eq!(active.enter_offset(40), Offset::ORIGIN);
    }

    // --- Configuration -----------------------------------------------------

    #[test]
    fn configure_negative_pause_leaves_state() {
        let mut c = abc();
        let before = (c.orientation(), c.timing(), c.transition());
        let err = c.configure(Orientation::TopToBottom, 300, -5).unwrap_err();
        assert_eq!(
            err,
            CarouselError::InvalidConfiguration {
                field: "pause_ms",
                value: -5
            }
        );
        assert_eq!((c.orientation(), c.timing(), c.transition()), before);
    }

    #[test]
    fn set_orientation_recomputes_transition() {
        let mut c = abc();
        c.set_orientation(Orientation::RightToLeft);
        assert_eq!(c.transition().enter, Effect::SlideInFromRight);
        assert_eq!(c.transition().exit, Effect::SlideOutToLeft);
        assert_eq!(c.transition().duration, Timing::default().each_time());
    }

    // --- Click -------------------------------------------------------------

    #[test]
    fn click_reports_visible_child() {
        let mut c = abc();
        c.advance();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        c.add_click_listener(move |ev: &ClickEvent<'_, &'static str>, _| {
            *sink.borrow_mut() = Some((*ev.view, ev.position, ev.total));
        });
        assert!(c.on_click_visible());
        assert_eq!(*seen.borrow(), Some(("B", 1, 3)));
    }

    #[test]
    fn click_without_listener_is_noop() {
        let mut c = abc();
        assert!(!c.on_click_visible());
    }

    #[test]
    fn click_on_empty_is_noop() {
        let mut c = carousel();
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        c.add_click_listener(move |_: &ClickEvent<'_, &'static str>, _| *sink.borrow_mut() += 1);
        assert!(!c.on_click_visible());
        assert_eq!(*hits.borrow(), 0);
    }

    // --- Listener registry -------------------------------------------------

    #[test]
    fn set_listener_is_last_write_wins() {
        let mut c = abc();
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let a = Rc::clone(&first);
        let b = Rc::clone(&second);
        c.set_change_listener(move |_, _| *a.borrow_mut() += 1);
        c.set_change_listener(move |_, _| *b.borrow_mut() += 1);
        c.advance();
        assert_eq!((*first.borrow(), *second.borrow()), (0, 1));
    }

    #[test]
    fn multiple_listeners_run_in_order_and_can_be_removed() {
        let mut c = abc();
        let order = Rc::new(RefCell::new(Vec::new()));
        let o1 = Rc::clone(&order);
        let o2 = Rc::clone(&order);
        let id1 = c.add_change_listener(move |_, _| o1.borrow_mut().push(1));
        c.add_change_listener(move |_, _| o2.borrow_mut().push(2));

        c.advance();
        assert_eq!(*order.borrow(), vec![1, 2]);

        assert!(c.remove_listener(id1));
        assert!(!c.remove_listener(id1));
        c.advance();
        assert_eq!(*order.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn listener_ids_are_unique_across_kinds() {
        let mut c = abc();
        let a = c.add_change_listener(|_, _| {});
        let b = c.add_click_listener(|_: &ClickEvent<'_, &'static str>, _| {});
        assert_ne!(a, b);
        assert!(c.remove_listener(b));
        assert!(!c.on_click_visible());
    }

    // --- Re-entrancy -------------------------------------------------------

    #[test]
    fn stop_from_change_listener_stops_once() {
        let mut c = abc();
        let log = record_changes(&mut c);
        c.add_change_listener(|ev, control| {
            if ev.displayed == 2 {
                control.stop();
            }
        });
        c.start();
        for _ in 0..5 {
            c.tick(SEC);
        }
        assert!(!c.is_running());
        assert_eq!(*log.borrow(), vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn click_listener_can_restart() {
        let mut c = abc();
        c.add_click_listener(|_: &ClickEvent<'_, &'static str>, control| {
            if !control.is_running() {
                control.start();
            }
        });
        assert!(c.on_click_visible());
        assert!(c.is_running());
    }

    #[test]
    fn panicking_listener_leaves_state_consistent() {
        let mut c = abc();
        c.add_change_listener(|ev, _| {
            if ev.displayed == 1 {
                panic!("listener failure");
            }
        });
        let log = record_changes(&mut c);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            c.advance();
        }));
        assert!(result.is_err());
        assert_eq!(c.current_index(), Some(1));

        assert_eq!(c.advance(), Some(2));
        assert_eq!(*log.borrow(), vec![(2, 3)]);
    }

    // --- Tickable ----------------------------------------------------------

    #[test]
    fn wants_ticks_tracks_timer_and_animation() {
        let mut c = abc();
        assert!(!Tickable::wants_ticks(&c));
        c.advance();
        assert!(Tickable::wants_ticks(&c), "animation in flight");
        Tickable::tick(&mut c, SEC);
        assert!(!Tickable::wants_ticks(&c));
        c.start();
        assert!(Tickable::wants_ticks(&c));
    }
}
