// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

/// A source of monotonic timestamps.
pub trait Clock {
    /// The current time.
    ///
    /// Successive calls never return a time earlier than a previous call.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// A point in time, relative to the origin of the clock that produced it.
///
/// The origin is arbitrary, but fixed for a given clock, so timestamps are
/// only comparable with timestamps from the same clock.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The clock origin.
    pub const ZERO: Timestamp = Timestamp(Duration::ZERO);

    /// Create a Timestamp from seconds and nanoseconds since the origin.
    pub fn new(sec: u64, nsec: u32) -> Self {
        Timestamp(Duration::new(sec, nsec))
    }

    /// Create a Timestamp from the number of nanoseconds since the origin.
    pub fn from_nanos(t: u64) -> Self {
        Timestamp(Duration::from_nanos(t))
    }

    /// The time elapsed since an earlier timestamp.
    ///
    /// Returns zero if `earlier` is actually later.
    pub fn elapsed_since(&self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    /// The time since the clock origin.
    pub fn since_origin(&self) -> Duration {
        self.0
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, d: Duration) -> Timestamp {
        Timestamp(self.0 + d)
    }
}

/// The kernel **CLOCK_MONOTONIC_RAW** clock.
///
/// Not subject to NTP slewing, so intervals are measured against the raw
/// hardware oscillator.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicRawClock;

impl Clock for MonotonicRawClock {
    fn now(&self) -> Timestamp {
        // SAFETY: an all-zero timespec is valid, and the clock id is always
        // supported on Linux, so the call cannot fail.
        let ts = unsafe {
            let mut ts: libc::timespec = std::mem::zeroed();
            libc::clock_gettime(libc::CLOCK_MONOTONIC_RAW, &mut ts);
            ts
        };
        Timestamp::new(ts.tv_sec as u64, ts.tv_nsec as u32)
    }
}
