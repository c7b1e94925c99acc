// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library to toggle GPIO output lines at independent fixed intervals.
//!
//! Each controlled line is described by a [`Stimulus`], which holds the
//! current level of the line, the interval between toggles, and the time of
//! the most recent toggle.
//! A [`Blinker`] owns a set of stimuli and sweeps over them, sampling a
//! monotonic [`Clock`] and toggling each line whose interval has elapsed,
//! until a [`Shutdown`] is requested.
//! On shutdown all lines are driven low before the hardware is released.
//!
//! The hardware is accessed through the [`Platform`] and [`Gpio`] traits.
//! The [`CdevPlatform`] provides those using the Linux GPIO character device.
//!
//! # Example Usage
//!
//! Blinking the default pair of lines until interrupted:
//!
//! ```no_run
//! # fn example() -> gpioblink::Result<()> {
//! use gpioblink::{CdevPlatform, Config, MonotonicRawClock, Shutdown};
//!
//! let config = Config::default();
//! let shutdown = Shutdown::on_interrupt()?;
//! let platform = CdevPlatform::from_config(&config);
//! gpioblink::blink(&platform, MonotonicRawClock, &config, shutdown)?;
//! # Ok(())
//! # }
//! ```
pub use gpiocdev::line::Offset;
use std::path::PathBuf;

/// Sweeping the stimuli and shutting down.
pub mod blinker;
pub use blinker::{Blinker, Pacing};

/// The GPIO character device backed hardware.
pub mod cdev;
pub use cdev::{CdevGpio, CdevPlatform};

/// Monotonic time sources.
pub mod clock;
pub use clock::{Clock, MonotonicRawClock, Timestamp};

/// The startup configuration.
pub mod config;
pub use config::{Config, IntervalMode, StimulusConfig};

/// The hardware capability traits.
pub mod hardware;
pub use hardware::{Gpio, Platform};

mod level;
pub use level::Level;

/// Signal driven shutdown requests.
pub mod shutdown;
pub use shutdown::Shutdown;

/// The per-line toggle state.
pub mod stimulus;
pub use stimulus::Stimulus;

/// Initialise the hardware, configure the lines, then blink until shutdown.
///
/// Returns the released hardware once the lines have been driven low.
///
/// If the platform fails to initialise then no line is configured or written.
pub fn blink<P, C>(platform: &P, clock: C, config: &Config, shutdown: Shutdown) -> Result<P::Gpio>
where
    P: Platform,
    C: Clock,
{
    config.validate()?;
    let stimuli = config.stimuli()?;
    let gpio = platform.init()?;
    let blinker = Blinker::new(gpio, clock, stimuli)?.with_pacing(config.pacing);
    Ok(blinker.run(&shutdown))
}

/// The process exit status corresponding to the outcome of [`blink`].
pub fn exit_status<T>(res: &Result<T>) -> u8 {
    match res {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Errors returned by [`gpioblink`] functions.
///
/// [`gpioblink`]: crate
#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    /// The hardware could not be initialised.
    #[error("unable to initialise \"{0}\": {1}")]
    HardwareInit(PathBuf, String),

    /// A line could not be configured as an output.
    #[error("unable to configure line {0} as output: {1}")]
    Configure(Offset, String),

    /// An error returned when there is a problem with an argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// The interrupt handler could not be registered.
    #[error("unable to register interrupt handler: {0}")]
    Signal(String),
}

impl Error {
    /// The process exit status for the error.
    ///
    /// All errors occur before the lines start blinking, so all are fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// The result for [`gpioblink`] functions.
///
/// [`gpioblink`]: crate
pub type Result<T> = std::result::Result<T, Error>;
