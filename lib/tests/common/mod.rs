// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(dead_code)]

use gpioblink::{Clock, Error, Gpio, Level, Offset, Platform, Result, Shutdown, Timestamp};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

// calls made on the fake hardware
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    Init,
    Configure(Offset),
    Write(Offset, Level),
    Close,
}

#[derive(Clone, Debug, Default)]
pub struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn writes(&self) -> Vec<(Offset, Level)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Write(offset, level) => Some((*offset, *level)),
                _ => None,
            })
            .collect()
    }

    pub fn writes_to(&self, pin: Offset) -> Vec<Level> {
        self.writes()
            .into_iter()
            .filter(|(offset, _)| *offset == pin)
            .map(|(_, level)| level)
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Default)]
pub struct FakePlatform {
    pub rec: Recorder,
    pub fail_init: bool,
    pub reject: Option<Offset>,
}

impl FakePlatform {
    pub fn failing() -> Self {
        FakePlatform {
            fail_init: true,
            ..Default::default()
        }
    }
}

impl Platform for FakePlatform {
    type Gpio = FakeGpio;

    fn init(&self) -> Result<FakeGpio> {
        self.rec.push(Call::Init);
        if self.fail_init {
            return Err(Error::HardwareInit(
                "/dev/gpiochip9".into(),
                "No such file or directory".into(),
            ));
        }
        Ok(FakeGpio {
            rec: self.rec.clone(),
            reject: self.reject,
        })
    }
}

#[derive(Debug, Default)]
pub struct FakeGpio {
    pub rec: Recorder,
    pub reject: Option<Offset>,
}

impl Gpio for FakeGpio {
    fn configure_output(&mut self, offset: Offset) -> Result<()> {
        if self.reject == Some(offset) {
            return Err(Error::Configure(offset, "Device or resource busy".into()));
        }
        self.rec.push(Call::Configure(offset));
        Ok(())
    }

    fn write(&mut self, offset: Offset, level: Level) {
        self.rec.push(Call::Write(offset, level));
    }

    fn close(&mut self) {
        self.rec.push(Call::Close);
    }
}

// a clock that only moves when told to
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<Timestamp>>);

impl ManualClock {
    pub fn set(&self, t: Timestamp) {
        self.0.set(t);
    }

    pub fn advance(&self, d: Duration) {
        self.0.set(self.0.get() + d);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.get()
    }
}

// a clock that advances by step on each read, and requests shutdown once
// it has been read limit times.
#[derive(Debug)]
pub struct SteppingClock {
    now: Cell<Timestamp>,
    step: Duration,
    reads: Rc<Cell<usize>>,
    limit: usize,
    shutdown: Shutdown,
}

impl SteppingClock {
    pub fn new(step: Duration, limit: usize, shutdown: Shutdown) -> Self {
        SteppingClock {
            now: Cell::new(Timestamp::ZERO),
            step,
            reads: Rc::default(),
            limit,
            shutdown,
        }
    }

    pub fn reads(&self) -> Rc<Cell<usize>> {
        self.reads.clone()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let t = self.now.get() + self.step;
        self.now.set(t);
        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        if reads >= self.limit {
            self.shutdown.request();
        }
        t
    }
}
