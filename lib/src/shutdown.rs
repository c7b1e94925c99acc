// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Result};
use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};

// Set by the SIGINT handler.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// The SIGINT handler.
///
/// Only stores to an atomic, so is async-signal-safe.
/// The lines are driven low by the blink loop once it observes the request.
pub extern "C" fn interrupt_handler(_signum: c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// A flag indicating that shutdown has been requested.
///
/// The flag is static so that it may be set from signal context.
#[derive(Clone, Copy, Debug)]
pub struct Shutdown {
    flag: &'static AtomicBool,
}

impl Shutdown {
    /// Register the SIGINT handler and return the flag it sets.
    pub fn on_interrupt() -> Result<Self> {
        let handler = interrupt_handler as extern "C" fn(c_int);
        // SAFETY: the handler only performs an atomic store.
        let prev = unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };
        if prev == libc::SIG_ERR {
            return Err(Error::Signal(std::io::Error::last_os_error().to_string()));
        }
        tracing::debug!("interrupt handler registered");
        Ok(Self::interrupt())
    }

    /// The flag set by the SIGINT handler, without registering the handler.
    pub fn interrupt() -> Self {
        Shutdown { flag: &INTERRUPTED }
    }

    /// A flag independent of any signal.
    pub fn from_flag(flag: &'static AtomicBool) -> Self {
        Shutdown { flag }
    }

    /// Request shutdown.
    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check if shutdown has been requested.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
