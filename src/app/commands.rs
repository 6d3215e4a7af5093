//! Inbound commands to the application service.
//!
//! The serial protocol is a single ASCII digit per command: `'1'` switches
//! the output on, `'0'` switches it off.  Every other byte value is
//! undefined and dropped by the
//! [`OutputController`](super::service::OutputController) without effect.

/// Byte commanding the output on.
pub const CMD_ON: u8 = b'1';
/// Byte commanding the output off.
pub const CMD_OFF: u8 = b'0';

/// Commands that the serial channel can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Force the output on.
    SwitchOn,
    /// Force the output off.
    SwitchOff,
}

impl Command {
    /// Decode one wire byte.  Returns `None` for anything that is not a
    /// recognised command; the caller decides whether to count or log it.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_ON => Some(Self::SwitchOn),
            CMD_OFF => Some(Self::SwitchOff),
            _ => None,
        }
    }

    /// The output level this command demands.
    pub fn output_on(self) -> bool {
        matches!(self, Self::SwitchOn)
    }
}
