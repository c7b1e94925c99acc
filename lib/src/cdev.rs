// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Config, Error, Gpio, Level, Offset, Platform, Result};
use gpiocdev::chip::Chip;
use gpiocdev::line::Value;
use gpiocdev::Request;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A [`Platform`] backed by a GPIO character device.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CdevPlatform {
    chip: PathBuf,
    consumer: String,
}

impl CdevPlatform {
    /// Create a platform for the given chip.
    ///
    /// The `consumer` label is applied to each requested line.
    pub fn new<P: Into<PathBuf>, N: Into<String>>(chip: P, consumer: N) -> Self {
        CdevPlatform {
            chip: chip.into(),
            consumer: consumer.into(),
        }
    }

    /// Create a platform for the chip and consumer in the config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.chip, &config.consumer)
    }

    /// The path to the chip.
    pub fn chip(&self) -> &Path {
        &self.chip
    }
}

impl Platform for CdevPlatform {
    type Gpio = CdevGpio;

    fn init(&self) -> Result<CdevGpio> {
        let chip = Chip::from_path(&self.chip)
            .map_err(|e| Error::HardwareInit(self.chip.clone(), e.to_string()))?;
        let info = chip
            .info()
            .map_err(|e| Error::HardwareInit(self.chip.clone(), e.to_string()))?;
        tracing::info!(
            chip = %self.chip.display(),
            name = %info.name,
            label = %info.label,
            lines = info.num_lines,
            "initialised"
        );
        Ok(CdevGpio {
            chip: self.chip.clone(),
            consumer: self.consumer.clone(),
            num_lines: info.num_lines,
            requests: HashMap::new(),
        })
    }
}

/// GPIO lines requested from a character device.
///
/// Each line is held in its own request, so lines are configured and
/// released independently.
#[derive(Debug)]
pub struct CdevGpio {
    chip: PathBuf,
    consumer: String,
    num_lines: u32,
    requests: HashMap<Offset, Request>,
}

impl CdevGpio {
    /// The offsets of the lines currently requested.
    pub fn offsets(&self) -> Vec<Offset> {
        let mut offsets: Vec<Offset> = self.requests.keys().copied().collect();
        offsets.sort_unstable();
        offsets
    }
}

impl Gpio for CdevGpio {
    fn configure_output(&mut self, offset: Offset) -> Result<()> {
        if offset >= self.num_lines {
            return Err(Error::Configure(
                offset,
                format!("chip only has {} lines", self.num_lines),
            ));
        }
        let req = Request::builder()
            .on_chip(&self.chip)
            .with_consumer(&self.consumer)
            .with_line(offset)
            .as_output(Value::Inactive)
            .request()
            .map_err(|e| Error::Configure(offset, e.to_string()))?;
        tracing::debug!(chip = %self.chip.display(), offset, "requested as output");
        self.requests.insert(offset, req);
        Ok(())
    }

    fn write(&mut self, offset: Offset, level: Level) {
        match self.requests.get(&offset) {
            Some(req) => {
                if let Err(e) = req.set_value(offset, level.into()) {
                    tracing::warn!(offset, %level, error = %e, "write failed");
                }
            }
            None => tracing::warn!(offset, %level, "write to unrequested line"),
        }
    }

    fn close(&mut self) {
        // dropping the requests releases the lines
        self.requests.clear();
        tracing::debug!(chip = %self.chip.display(), "released");
    }
}
