// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Clock, Gpio, Level, Result, Shutdown, Stimulus};
use std::thread;
use std::time::{Duration, Instant};

// The longest a shutdown request may go unnoticed while pacing.
const SHUTDOWN_POLL: Duration = Duration::from_millis(10);

/// How successive sweeps are spaced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Pacing {
    /// Sweep continuously, without sleeping.
    ///
    /// Gives the tightest timing, at the cost of a busy CPU core.
    #[default]
    Busy,

    /// Sleep for the period between sweeps.
    Tick(Duration),
}

/// Toggles a set of lines at their stimulus intervals.
///
/// The lines are configured as outputs when the blinker is created, and
/// driven low and released when it is shut down.
#[derive(Debug)]
pub struct Blinker<G: Gpio, C: Clock> {
    gpio: G,
    clock: C,
    stimuli: Vec<Stimulus>,
    pacing: Pacing,
}

impl<G: Gpio, C: Clock> Blinker<G, C> {
    /// Create a blinker, configuring the line of each stimulus as an output.
    pub fn new(mut gpio: G, clock: C, stimuli: Vec<Stimulus>) -> Result<Self> {
        for s in &stimuli {
            gpio.configure_output(s.pin)?;
            tracing::info!(
                pin = s.pin,
                name = %s.name,
                interval = ?s.interval(),
                "configured"
            );
        }
        Ok(Blinker {
            gpio,
            clock,
            stimuli,
            pacing: Pacing::Busy,
        })
    }

    /// Set the pacing of sweeps performed by [`run`].
    ///
    /// [`run`]: Blinker::run
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// The stimuli being toggled.
    pub fn stimuli(&self) -> &[Stimulus] {
        &self.stimuli
    }

    /// The hardware.
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Perform a single sweep over the stimuli.
    ///
    /// The clock is sampled for each stimulus, whether it is due or not.
    ///
    /// Returns the number of lines toggled.
    pub fn sweep(&mut self) -> usize {
        let mut toggled = 0;
        for s in self.stimuli.iter_mut() {
            let now = self.clock.now();
            if s.update(now, &mut self.gpio) {
                toggled += 1;
            }
        }
        toggled
    }

    /// Sweep until shutdown is requested, then shut down.
    ///
    /// The request is checked before each sweep, and periodically while
    /// sleeping between ticks.
    pub fn run(mut self, shutdown: &Shutdown) -> G {
        while !shutdown.is_requested() {
            self.sweep();
            if let Pacing::Tick(period) = self.pacing {
                sleep_until_shutdown(period, shutdown);
            }
        }
        self.shutdown()
    }

    /// Drive all lines low and release the hardware.
    ///
    /// The lines are driven low regardless of their current level.
    pub fn shutdown(mut self) -> G {
        tracing::info!("shutting down");
        for s in &self.stimuli {
            self.gpio.write(s.pin, Level::Low);
        }
        self.gpio.close();
        self.gpio
    }
}

// Sleep for the period, returning early if shutdown is requested.
fn sleep_until_shutdown(period: Duration, shutdown: &Shutdown) {
    // a period too long to represent never ends
    let deadline = Instant::now().checked_add(period);
    while !shutdown.is_requested() {
        let remaining = match deadline {
            Some(d) => d.saturating_duration_since(Instant::now()),
            None => SHUTDOWN_POLL,
        };
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(SHUTDOWN_POLL));
    }
}
