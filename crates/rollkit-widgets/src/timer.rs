#![forbid(unsafe_code)]

//! Owned auto-advance timer.
//!
//! A [`TimerHandle`] exists exactly while the carousel is running: `start`
//! creates it, `stop` (or dropping the carousel) destroys it. It measures
//! time handed in by the host and reports when a period has elapsed.
//!
//! # Invariants
//!
//! 1. At most one fire per `poll`; whole periods missed during a long stall
//!    are coalesced rather than replayed.
//! 2. The period in effect is the one armed at the previous fire. A new
//!    period only applies from the next fire onward.
//! 3. The phase is kept across fires: leftover time carries into the next
//!    period (modulo that period).

use std::time::Duration;

/// Running interval timer driven by host-supplied elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerHandle {
    period: Duration,
    elapsed: Duration,
    fires: u64,
}

impl TimerHandle {
    pub(crate) const fn arm(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            fires: 0,
        }
    }

    /// Period until the next fire.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated toward the next fire.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left until the next fire.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Number of fires since arming.
    #[must_use]
    pub const fn fires(&self) -> u64 {
        self.fires
    }

    /// Accumulate `dt`; on a fire, re-arm with `next_period` and return `true`.
    pub(crate) fn poll(&mut self, dt: Duration, next_period: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.period {
            return false;
        }
        let carry = self.elapsed - self.period;
        self.period = next_period;
        self.elapsed = if next_period.is_zero() {
            Duration::ZERO
        } else {
            let rem = carry.as_nanos() % next_period.as_nanos();
            Duration::from_nanos(u64::try_from(rem).unwrap_or(u64::MAX))
        };
        self.fires = self.fires.wrapping_add(1);
        true
    }
}
