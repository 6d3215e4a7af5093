//! Switched-output relay driver.
//!
//! One digital pin into a relay module, active HIGH.  The driver caches
//! the last commanded level so callers can query state without a register
//! read; the cache is authoritative because nothing else writes this pin.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: drives the simulated pin, state tracked identically.

use crate::drivers::hw_init;

pub struct RelayDriver {
    gpio: i32,
    on: bool,
}

impl RelayDriver {
    /// The pin is driven low immediately so cache and hardware agree from
    /// the first instant.
    pub fn new(gpio: i32) -> Self {
        hw_init::gpio_write(gpio, false);
        Self { gpio, on: false }
    }

    /// Drive the relay.  Idempotent; re-asserting the held level is fine.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    /// Last commanded level.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
