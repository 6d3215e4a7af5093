//! HC-05 Bluetooth serial bridge driver.
//!
//! ## Hardware
//!
//! An HC-05 module in transparent SPP mode on UART1, 8N1.  The module
//! ships configured for 9600 baud; whatever a paired phone sends arrives
//! here as raw bytes.  The link is receive-only — this firmware never
//! writes back to the module.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: non-blocking reads from the UART driver ring via hw_init.
//! On host/test: reads the simulated RX ring fed by `sim_queue_serial`.

use crate::drivers::hw_init;

pub struct Hc05Driver {
    baud: u32,
}

impl Hc05Driver {
    /// UART install and pin routing happen in
    /// [`hw_init::init_peripherals`]; this just records the link config.
    pub fn new(baud: u32) -> Self {
        Self { baud }
    }

    /// Configured baud rate.
    pub fn baud(&self) -> u32 {
        self.baud
    }

    /// Bytes waiting in the RX ring.
    pub fn rx_available(&self) -> usize {
        hw_init::uart_rx_available()
    }

    /// Pop one byte without blocking.  `None` when the ring is empty.
    pub fn read_byte(&mut self) -> Option<u8> {
        hw_init::uart_read_byte()
    }
}
