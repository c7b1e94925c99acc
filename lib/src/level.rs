// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiocdev::line::Value;

/// The level driven onto an output line.
///
/// Lines are requested active-high, so the mapping to the logical
/// [`Value`] of the line is:
///
/// | Level | Value |
/// |-------|-------|
/// | **Low**  | Inactive |
/// | **High** | Active |
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Level {
    /// The line is driven low.
    #[default]
    Low,
    /// The line is driven high.
    High,
}

impl Level {
    /// The level opposite the current level.
    pub fn not(&self) -> Level {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::High => "high",
            Level::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl From<Level> for Value {
    fn from(l: Level) -> Value {
        match l {
            Level::Low => Value::Inactive,
            Level::High => Value::Active,
        }
    }
}

impl From<Value> for Level {
    fn from(v: Value) -> Level {
        match v {
            Value::Inactive => Level::Low,
            Value::Active => Level::High,
        }
    }
}

impl From<Level> for bool {
    fn from(l: Level) -> bool {
        l == Level::High
    }
}
