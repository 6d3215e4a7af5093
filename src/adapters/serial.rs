//! Serial command adapter — the HC-05 link behind [`CommandPort`].
//!
//! A thin bridge: the driver owns the UART ring, this adapter gives the
//! domain its byte-at-a-time view of it.

use crate::app::ports::CommandPort;
use crate::drivers::hc05::Hc05Driver;

/// Adapter exposing the HC-05 RX stream as the inbound command channel.
pub struct SerialCommands {
    hc05: Hc05Driver,
}

impl SerialCommands {
    pub fn new(hc05: Hc05Driver) -> Self {
        Self { hc05 }
    }
}

impl CommandPort for SerialCommands {
    fn available(&self) -> usize {
        self.hc05.rx_available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.hc05.read_byte()
    }
}
