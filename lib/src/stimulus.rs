// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Gpio, Level, Offset, Timestamp};
use std::time::Duration;

/// The toggle state of a single output line.
///
/// The line starts low, and is toggled each time at least `interval` has
/// elapsed since the previous toggle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stimulus {
    /// The offset of the line on the chip.
    pub pin: Offset,

    /// A label for the line, used in log output.
    pub name: String,

    current: Level,
    interval: Duration,
    last: Timestamp,
}

impl Stimulus {
    /// Create a stimulus for a line, initially low and never toggled.
    pub fn new<N: Into<String>>(pin: Offset, name: N, interval: Duration) -> Self {
        Stimulus {
            pin,
            name: name.into(),
            current: Level::Low,
            interval,
            last: Timestamp::ZERO,
        }
    }

    /// The level most recently written to the line.
    pub fn current(&self) -> Level {
        self.current
    }

    /// The minimum time between toggles.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The time of the most recent toggle.
    ///
    /// The clock origin if the line has never been toggled.
    pub fn last(&self) -> Timestamp {
        self.last
    }

    /// Returns true if the interval has elapsed at time `now`.
    #[inline]
    pub fn is_due(&self, now: Timestamp) -> bool {
        now.elapsed_since(self.last) >= self.interval
    }

    /// Toggle the line if the interval has elapsed at time `now`.
    ///
    /// Returns true if the line was toggled.
    pub fn update<G: Gpio + ?Sized>(&mut self, now: Timestamp, gpio: &mut G) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.current = self.current.not();
        self.last = now;
        gpio.write(self.pin, self.current);
        tracing::trace!(pin = self.pin, name = %self.name, level = %self.current, "toggled");
        true
    }
}

/// The toggle interval for a square wave of the given frequency in Hz.
///
/// Each period has a high and a low half, so the interval is half the period.
///
/// Returns `None` if the frequency is not positive, or is so low that the
/// interval cannot be represented.
pub fn interval_from_frequency(frequency: f64) -> Option<Duration> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / (2.0 * frequency)).ok()
}
