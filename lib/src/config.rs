// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::stimulus::interval_from_frequency;
use crate::{Error, Offset, Pacing, Result, Stimulus};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// The chip used if none is specified.
pub const DEFAULT_CHIP: &str = "/dev/gpiochip0";

/// The consumer label used if none is specified.
pub const DEFAULT_CONSUMER: &str = "gpioblink";

/// How the toggle interval is derived from the stimulus frequency.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IntervalMode {
    /// Half the period of the frequency.
    #[default]
    Exact,

    /// A zero interval, so the line toggles on every sweep.
    ///
    /// The frequency is ignored.
    FreeRun,
}

/// The configuration of a single stimulus.
#[derive(Clone, Debug, PartialEq)]
pub struct StimulusConfig {
    /// The offset of the line on the chip.
    pub offset: Offset,

    /// The frequency of the square wave to generate, in Hz.
    pub frequency: f64,

    /// A label for the line.
    pub name: String,
}

impl StimulusConfig {
    /// Create the configuration for a line toggled at `frequency` Hz.
    pub fn new<N: Into<String>>(offset: Offset, frequency: f64, name: N) -> Self {
        StimulusConfig {
            offset,
            frequency,
            name: name.into(),
        }
    }

    /// The toggle interval for the stimulus under the given mode.
    ///
    /// The frequency must be usable even when it is ignored by the mode.
    pub fn interval(&self, mode: IntervalMode) -> Result<Duration> {
        let interval = interval_from_frequency(self.frequency).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "line {} frequency must be positive and give a representable interval",
                self.offset
            ))
        })?;
        Ok(match mode {
            IntervalMode::Exact => interval,
            IntervalMode::FreeRun => Duration::ZERO,
        })
    }
}

/// The configuration of the blinker.
///
/// Fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The path to the chip containing the lines.
    pub chip: PathBuf,

    /// The consumer label applied to the requested lines.
    pub consumer: String,

    /// The lines to toggle.
    pub stimuli: Vec<StimulusConfig>,

    /// How toggle intervals are derived.
    pub interval_mode: IntervalMode,

    /// How sweeps are paced.
    pub pacing: Pacing,
}

impl Default for Config {
    /// The left and right stimuli on a Raspberry Pi header.
    ///
    /// Pin 11 (GPIO17) at 10Hz and pin 12 (GPIO18) at 1Hz.
    fn default() -> Self {
        Config {
            chip: DEFAULT_CHIP.into(),
            consumer: DEFAULT_CONSUMER.into(),
            stimuli: vec![
                StimulusConfig::new(17, 10.0, "left"),
                StimulusConfig::new(18, 1.0, "right"),
            ],
            interval_mode: IntervalMode::Exact,
            pacing: Pacing::Busy,
        }
    }
}

impl Config {
    /// Check the config describes a set of lines that can be toggled.
    pub fn validate(&self) -> Result<()> {
        if self.stimuli.is_empty() {
            return Err(Error::InvalidArgument("no stimuli specified".into()));
        }
        let mut offsets = HashSet::new();
        for sc in &self.stimuli {
            if !offsets.insert(sc.offset) {
                return Err(Error::InvalidArgument(format!(
                    "line {} specified more than once",
                    sc.offset
                )));
            }
            sc.interval(self.interval_mode)?;
        }
        Ok(())
    }

    /// The initial stimuli described by the config.
    pub fn stimuli(&self) -> Result<Vec<Stimulus>> {
        self.stimuli
            .iter()
            .map(|sc| {
                let interval = sc.interval(self.interval_mode)?;
                Ok(Stimulus::new(sc.offset, &sc.name, interval))
            })
            .collect()
    }
}
