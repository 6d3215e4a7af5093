//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the button and relay drivers, exposing them through
//! [`ButtonPort`] and [`SwitchPort`].  Together with the serial adapter
//! this is the only layer that touches actual hardware.  On non-espidf
//! targets, the underlying drivers use cfg-gated simulation backends.

use crate::app::ports::{ButtonPort, SwitchPort};
use crate::drivers::button::ButtonDriver;
use crate::drivers::relay::RelayDriver;

/// Concrete adapter that combines the pin-level hardware behind port traits.
pub struct HardwareAdapter {
    button: ButtonDriver,
    relay: RelayDriver,
}

impl HardwareAdapter {
    pub fn new(button: ButtonDriver, relay: RelayDriver) -> Self {
        Self { button, relay }
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl ButtonPort for HardwareAdapter {
    fn read_raw(&mut self) -> bool {
        self.button.read_level()
    }
}

// ── SwitchPort implementation ─────────────────────────────────

impl SwitchPort for HardwareAdapter {
    fn drive(&mut self, on: bool) {
        self.relay.set(on);
    }

    fn is_on(&self) -> bool {
        self.relay.is_on()
    }
}
