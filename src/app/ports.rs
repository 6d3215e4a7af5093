//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OutputController (domain)
//! ```
//!
//! Driven adapters (button, switch output, serial channel, event sinks)
//! implement these traits.  The
//! [`OutputController`](super::service::OutputController) consumes them via
//! generics, so the domain core never touches hardware directly and the
//! whole control loop runs against mocks on the host.

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain samples the raw button level through this.
pub trait ButtonPort {
    /// Current raw (undebounced) level.  `true` = pressed.
    fn read_raw(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Switch port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands the switched output through this.
///
/// Implementations must latch the level until the next `drive` call and
/// must tolerate being driven to the level they already hold.
pub trait SwitchPort {
    /// Drive the output.  `true` = load energised.
    fn drive(&mut self, on: bool);

    /// Level most recently commanded via [`drive`](SwitchPort::drive).
    fn is_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Command port (driven adapter: serial channel → domain)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented inbound command channel (the HC-05 serial bridge).
///
/// The domain consumes at most one byte per poll; backlog stays queued in
/// the implementation until later polls drain it.
pub trait CommandPort {
    /// Number of bytes waiting to be read.
    fn available(&self) -> usize;

    /// Pop one byte, or `None` if the channel is empty.
    fn read_byte(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a
/// recording buffer in tests, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
