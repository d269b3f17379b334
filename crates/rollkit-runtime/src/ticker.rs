#![forbid(unsafe_code)]

//! Interval tick source on a background thread.
//!
//! # How it works
//!
//! 1. [`Ticker::spawn`] starts a thread that waits on a [`StopSignal`] with
//!    the configured interval as timeout.
//! 2. Each timeout sends a [`Tick`] through an mpsc channel.
//! 3. The returned [`TickerHandle`] owns the receiving end and the stop
//!    trigger. Dropping it stops the thread; [`TickerHandle::stop`] also
//!    joins it.
//!
//! Ticks carry a sequence number only. Consumers measure elapsed time
//! themselves, so a slow host loop sees fewer, larger steps instead of a
//! backlog.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// A single timer fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Zero-based fire count since the ticker was spawned.
    pub seq: u64,
}

/// Shared stop flag with a condition variable for prompt wakeups.
type StopState = Arc<(Mutex<bool>, Condvar)>;

fn lock(state: &Mutex<bool>) -> MutexGuard<'_, bool> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Signal observed by the ticker thread.
#[derive(Clone)]
pub struct StopSignal {
    inner: StopState,
}

impl std::fmt::Debug for StopSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopSignal")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl StopSignal {
    /// Create a new (signal, trigger) pair.
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner: StopState = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: Arc::clone(&inner),
        };
        (signal, StopTrigger { inner })
    }

    /// Check if the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        *lock(&self.inner.0)
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if timed out.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (state, cvar) = &*self.inner;
        let guard = lock(state);
        if *guard {
            return true;
        }
        let (guard, _) = cvar
            .wait_timeout_while(guard, duration, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// Owner-side half of a [`StopSignal`].
pub(crate) struct StopTrigger {
    inner: StopState,
}

impl StopTrigger {
    /// Signal the ticker thread to exit.
    pub(crate) fn stop(&self) {
        let (state, cvar) = &*self.inner;
        *lock(state) = true;
        cvar.notify_all();
    }
}

/// Configuration for an interval tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    /// Smallest interval a ticker will sleep for.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Create a ticker firing every `interval`, clamped to
    /// [`Ticker::MIN_INTERVAL`] so a zero interval cannot spin.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Self::MIN_INTERVAL),
        }
    }

    /// The effective interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Start firing on a background thread.
    #[must_use = "dropping the handle stops the ticker"]
    pub fn spawn(self) -> TickerHandle {
        let (sender, receiver) = mpsc::channel();
        let (signal, trigger) = StopSignal::new();
        let interval = self.interval;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Starting ticker");
        let thread = thread::spawn(move || run(interval, &sender, &signal));

        TickerHandle {
            interval,
            trigger,
            receiver,
            thread: Some(thread),
        }
    }
}

fn run(interval: Duration, sender: &mpsc::Sender<Tick>, stop: &StopSignal) {
    let mut seq = 0u64;
    loop {
        if stop.wait_timeout(interval) {
            break;
        }
        if sender.send(Tick { seq }).is_err() {
            break;
        }
        seq = seq.wrapping_add(1);
    }
}

/// A running ticker.
pub struct TickerHandle {
    interval: Duration,
    trigger: StopTrigger,
    receiver: mpsc::Receiver<Tick>,
    thread: Option<thread::JoinHandle<()>>,
}

impl std::fmt::Debug for TickerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerHandle")
            .field("interval", &self.interval)
            .field("running", &self.thread.is_some())
            .finish_non_exhaustive()
    }
}

impl TickerHandle {
    /// Interval this ticker fires at.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Collect every tick delivered so far without blocking.
    pub fn drain(&self) -> Vec<Tick> {
        self.receiver.try_iter().collect()
    }

    /// Block until the next tick or `timeout`, whichever comes first.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Tick> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Stop the ticker and join its thread.
    pub fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "Stopped ticker");
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.trigger.stop();
        // Don't join in drop to avoid blocking
    }
}
