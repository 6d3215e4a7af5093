//! Outbound application events.
//!
//! The [`OutputController`](super::service::OutputController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, record in a
//! test buffer, etc.

/// Which input path caused an output change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    /// Debounced rising edge on the panel button.
    Button,
    /// Accepted byte on the serial command channel.
    Serial,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started (carries the initial output level).
    Started { output_on: bool },

    /// The logical output flipped.  Emitted only on actual change; an
    /// accepted command that re-asserts the current level is silent.
    OutputChanged { on: bool, source: OutputSource },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryData {
    /// Current logical output level.
    pub output_on: bool,
    /// Seconds since boot.
    pub uptime_secs: u64,
    /// Poll cycles executed since startup.
    pub poll_count: u64,
    /// Debounced button toggles honoured.
    pub button_toggles: u32,
    /// Serial commands accepted (`'0'`/`'1'`).
    pub serial_accepted: u32,
    /// Serial bytes discarded as unrecognised.
    pub serial_ignored: u32,
}
