// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Level, Offset, Result};

/// A platform providing access to GPIO hardware.
///
/// Initialisation is performed once, and must succeed before any line is
/// configured or written.
pub trait Platform {
    /// The handle to the initialised hardware.
    type Gpio: Gpio;

    /// Initialise the hardware.
    fn init(&self) -> Result<Self::Gpio>;
}

/// Initialised GPIO hardware.
///
/// Holding the [`Gpio`] grants access to the lines it has configured.
pub trait Gpio {
    /// Configure a line as an output, initially driven low.
    fn configure_output(&mut self, offset: Offset) -> Result<()>;

    /// Drive a configured line to the given level.
    ///
    /// Writes are assumed to succeed. Implementations report any failure
    /// out of band.
    fn write(&mut self, offset: Offset, level: Level);

    /// Release the hardware.
    ///
    /// No further writes are performed after the close.
    fn close(&mut self);
}
