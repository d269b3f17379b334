#![forbid(unsafe_code)]

//! Change and click listener registries.
//!
//! Listeners are kept in registration order and dispatched in that order.
//! Each registration returns a [`ListenerId`] that removes exactly that
//! listener. The legacy single-slot behavior (a new listener silently
//! replaces the old one) is available through the carousel's `set_*`
//! methods.
//!
//! Listeners cannot borrow the carousel while it is dispatching to them.
//! Instead they receive a [`CarouselControl`] and record what they want; the
//! carousel applies the request once dispatch has finished.

use std::fmt;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Payload of a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Index that was displayed before this advance.
    pub previous: usize,
    /// Index now displayed.
    pub displayed: usize,
    /// Number of children.
    pub total: usize,
}

/// Payload of a click notification.
#[derive(Debug)]
pub struct ClickEvent<'a, V> {
    /// The child that was tapped.
    pub view: &'a V,
    /// Its index.
    pub position: usize,
    /// Number of children.
    pub total: usize,
}

/// Run-state change requested from inside a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRequest {
    /// Arm the timer.
    Start,
    /// Cancel the timer.
    Stop,
}

/// Deferred control over the carousel, handed to listeners.
///
/// When several listeners disagree, the last request wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselControl {
    running: bool,
    request: Option<RunRequest>,
}

impl CarouselControl {
    pub(crate) const fn new(running: bool) -> Self {
        Self {
            running,
            request: None,
        }
    }

    /// Whether the timer was armed when dispatch began.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the carousel to stop once dispatch completes.
    pub fn stop(&mut self) {
        self.request = Some(RunRequest::Stop);
    }

    /// Ask the carousel to start once dispatch completes.
    pub fn start(&mut self) {
        self.request = Some(RunRequest::Start);
    }

    /// The pending request, if any.
    #[must_use]
    pub const fn request(&self) -> Option<RunRequest> {
        self.request
    }
}

/// Callback invoked after every advance.
pub type ChangeListener = Box<dyn FnMut(&ChangeEvent, &mut CarouselControl)>;

/// Callback invoked when the displayed child is tapped.
pub type ClickListener<V> = Box<dyn for<'a> FnMut(&ClickEvent<'a, V>, &mut CarouselControl)>;

/// Ordered listener list.
pub(crate) struct Listeners<L> {
    entries: Vec<(ListenerId, L)>,
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> fmt::Debug for Listeners<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}

impl<L> Listeners<L> {
    pub(crate) fn push(&mut self, id: ListenerId, listener: L) {
        self.entries.push((id, listener));
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut L> {
        self.entries.iter_mut().map(|(_, listener)| listener)
    }
}
