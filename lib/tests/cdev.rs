// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Requires the gpio-sim kernel module and permission to configure it.
//
// Run with `cargo test -- --ignored`.

use gpioblink::{CdevPlatform, Error, Gpio, Level, Platform};
use gpiosim::Simpleton;

#[test]
#[ignore = "requires gpio-sim"]
fn write_levels() {
    let s = Simpleton::new(8);
    let platform = CdevPlatform::new(s.dev_path(), "gpioblink-test");
    let mut gpio = platform.init().unwrap();

    gpio.configure_output(3).unwrap();
    assert_eq!(gpio.offsets(), vec![3]);
    assert_eq!(s.get_level(3).unwrap(), gpiosim::Level::Low);

    gpio.write(3, Level::High);
    assert_eq!(s.get_level(3).unwrap(), gpiosim::Level::High);

    gpio.write(3, Level::Low);
    assert_eq!(s.get_level(3).unwrap(), gpiosim::Level::Low);

    gpio.close();
    assert!(gpio.offsets().is_empty());
}

#[test]
#[ignore = "requires gpio-sim"]
fn configure_out_of_range() {
    let s = Simpleton::new(4);
    let platform = CdevPlatform::new(s.dev_path(), "gpioblink-test");
    let mut gpio = platform.init().unwrap();

    assert!(matches!(
        gpio.configure_output(4),
        Err(Error::Configure(4, _))
    ));
}

#[test]
fn init_missing_chip() {
    let platform = CdevPlatform::new("/dev/gpiochip_not_a_chip", "gpioblink-test");
    let res = platform.init();

    assert!(matches!(res, Err(Error::HardwareInit(ref p, _)) if p == platform.chip()));
}
