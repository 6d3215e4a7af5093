//! Panel button driver.
//!
//! ## Hardware
//!
//! Active-high momentary switch with an external pull-down.  The pin is
//! plain-polled: no interrupt, no hardware filtering.  Each call returns
//! the instantaneous level; debouncing belongs to the control core, which
//! samples this driver once per poll cycle.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO via hw_init helpers.
//! On host/test: reads the simulated pin level.

use crate::drivers::hw_init;

pub struct ButtonDriver {
    gpio: i32,
}

impl ButtonDriver {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Instantaneous raw level.  `true` = pressed (line pulled high).
    pub fn read_level(&mut self) -> bool {
        hw_init::gpio_read(self.gpio)
    }
}
