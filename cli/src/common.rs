// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpioblink::stimulus::interval_from_frequency;
use gpioblink::{Offset, StimulusConfig};
use std::path::PathBuf;
use std::time::Duration;

// common helper functions

pub fn chip_path_from_id(id: &str) -> PathBuf {
    if id.chars().all(char::is_numeric) {
        // from number
        return format!("/dev/gpiochip{id}").into();
    }
    if !id.chars().any(|x| x == '/') {
        // from name
        let mut p: PathBuf = "/dev".into();
        p.push(id);
        return p;
    }
    // from raw path
    id.into()
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseDurationError {
    #[error("'{0}' unknown units - use 's', 'ms' or 'us'.")]
    Units(String),
    #[error("'{0}' must start with a digit")]
    NoDigits(String),
    #[error("'{0}' {1}")]
    ParseDigits(String, std::num::ParseIntError),
    #[error("'{0}' is too long")]
    Overflow(String),
}

pub fn parse_duration(s: &str) -> std::result::Result<Duration, ParseDurationError> {
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    let t = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(0) => return Err(ParseDurationError::NoDigits(s.into())),
        Some(n) => {
            let (num, units) = s.split_at(n);
            let t = num
                .parse::<u64>()
                .map_err(|e| ParseDurationError::ParseDigits(num.into(), e))?;
            let scale = match units {
                "us" => 1000,
                "ms" => 1000000,
                "s" => 1000000000,
                _ => return Err(ParseDurationError::Units(s.into())),
            };
            t.checked_mul(scale)
                .ok_or_else(|| ParseDurationError::Overflow(s.into()))?
        }
        None => s
            .parse::<u64>()
            .map_err(|e| ParseDurationError::ParseDigits(s.into(), e))?
            .checked_mul(1000000)
            .ok_or_else(|| ParseDurationError::Overflow(s.into()))?,
    };
    Ok(Duration::from_nanos(t))
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseStimulusError {
    #[error("'{0}' must be in offset=frequency format")]
    Format(String),
    #[error("'{0}' is not a line offset: {1}")]
    Offset(String, std::num::ParseIntError),
    #[error("'{0}' is not a valid frequency")]
    Frequency(String),
    #[error("'{0}' frequency must be positive and give a representable interval")]
    OutOfRange(String),
}

// offset=frequency[:name]
pub fn parse_stimulus(s: &str) -> std::result::Result<StimulusConfig, ParseStimulusError> {
    let (offset, rest) = s
        .split_once('=')
        .ok_or_else(|| ParseStimulusError::Format(s.into()))?;
    let offset: Offset = offset
        .trim()
        .parse()
        .map_err(|e| ParseStimulusError::Offset(offset.into(), e))?;
    let (frequency, name) = match rest.split_once(':') {
        Some((f, n)) if !n.is_empty() => (f, n.to_string()),
        Some((f, _)) => (f, offset.to_string()),
        None => (rest, offset.to_string()),
    };
    let frequency: f64 = frequency
        .trim()
        .parse()
        .map_err(|_| ParseStimulusError::Frequency(frequency.into()))?;
    if interval_from_frequency(frequency).is_none() {
        return Err(ParseStimulusError::OutOfRange(s.into()));
    }
    Ok(StimulusConfig::new(offset, frequency, name))
}

pub fn format_error(verbose: bool, e: &anyhow::Error) -> String {
    if verbose {
        format!("{e:#}")
    } else {
        format!("{e}")
    }
}
