//! Application service — the hexagonal core.
//!
//! [`OutputController`] owns the debounce state and the logical output
//! level.  It exposes a clean, hardware-agnostic API.  All I/O flows
//! through port traits injected at call sites, making the entire control
//! loop testable with mock adapters and a fake clock.
//!
//! ```text
//!   ButtonPort ──▶ ┌───────────────────────┐ ──▶ EventSink
//!  CommandPort ──▶ │   OutputController    │
//!   SwitchPort ◀── │  Debounce · Arbiter   │
//!                  └───────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::debounce::{Debouncer, Edge};

use super::commands::Command;
use super::events::{AppEvent, OutputSource, TelemetryData};
use super::ports::{ButtonPort, CommandPort, EventSink, SwitchPort};

// ───────────────────────────────────────────────────────────────
// OutputController
// ───────────────────────────────────────────────────────────────

/// Arbitrates the two input paths onto the single switched output.
///
/// The button toggles; the serial channel sets an absolute level.  When
/// both act in the same poll cycle the serial command wins because it is
/// processed second.  The physical pin is driven in the same step as every
/// logical change, so `output_on` and the pin never diverge.
pub struct OutputController {
    debouncer: Debouncer,
    /// Logical output level; mirrors the commanded pin level at all times.
    output_on: bool,
    poll_count: u64,
    button_toggles: u32,
    serial_accepted: u32,
    serial_ignored: u32,
}

impl OutputController {
    /// Construct the controller from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            output_on: false,
            poll_count: 0,
            button_toggles: 0,
            serial_accepted: 0,
            serial_ignored: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the output to its defined idle level (off) and announce
    /// startup.  Called once, before the first poll.
    pub fn start(&mut self, hw: &mut impl SwitchPort, sink: &mut impl EventSink) {
        self.output_on = false;
        hw.drive(false);
        sink.emit(&AppEvent::Started { output_on: false });
        info!("OutputController started, output off");
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// Run one poll cycle: sample the button, then the serial channel.
    ///
    /// The `hw` parameter satisfies **both** [`ButtonPort`] and
    /// [`SwitchPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.  `now_ms` is monotonic milliseconds
    /// from the caller's clock; the controller never reads time itself.
    ///
    /// Never blocks and never fails: each stage is one read plus a
    /// conditional state update.
    pub fn poll(
        &mut self,
        now_ms: u64,
        hw: &mut (impl ButtonPort + SwitchPort),
        serial: &mut impl CommandPort,
        sink: &mut impl EventSink,
    ) {
        self.poll_count += 1;

        // 1. Button stage: debounce the raw level, toggle on rising edges.
        let reading = hw.read_raw();
        if self.debouncer.sample(reading, now_ms) == Some(Edge::Rising) {
            self.button_toggles = self.button_toggles.saturating_add(1);
            self.set_output(!self.output_on, OutputSource::Button, hw, sink);
        }

        // 2. Serial stage: at most one byte per cycle, so a backlog drains
        //    across polls.  Runs after the button, so a command arriving in
        //    the same cycle as a press has the last word.
        if serial.available() > 0 {
            if let Some(byte) = serial.read_byte() {
                match Command::from_byte(byte) {
                    Some(cmd) => self.apply_command(cmd, hw, sink),
                    None => {
                        self.serial_ignored = self.serial_ignored.saturating_add(1);
                        debug!("serial: ignoring byte 0x{:02x}", byte);
                    }
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot.  `uptime_secs` comes from the caller's
    /// clock adapter.
    pub fn telemetry(&self, uptime_secs: u64) -> TelemetryData {
        TelemetryData {
            output_on: self.output_on,
            uptime_secs,
            poll_count: self.poll_count,
            button_toggles: self.button_toggles,
            serial_accepted: self.serial_accepted,
            serial_ignored: self.serial_ignored,
        }
    }

    /// Current logical output level.
    pub fn output_on(&self) -> bool {
        self.output_on
    }

    // ── Internal ──────────────────────────────────────────────

    /// Honour an accepted serial command.
    ///
    /// The pin is re-driven even when the level is unchanged (the latch is
    /// idempotent and this keeps pin and state convergent no matter what),
    /// but the change event fires only on an actual flip.
    fn apply_command(
        &mut self,
        cmd: Command,
        hw: &mut impl SwitchPort,
        sink: &mut impl EventSink,
    ) {
        self.serial_accepted = self.serial_accepted.saturating_add(1);
        let on = cmd.output_on();
        if on == self.output_on {
            hw.drive(on);
        } else {
            self.set_output(on, OutputSource::Serial, hw, sink);
        }
    }

    /// Flip the logical level and the pin in the same step.
    fn set_output(
        &mut self,
        on: bool,
        source: OutputSource,
        hw: &mut impl SwitchPort,
        sink: &mut impl EventSink,
    ) {
        self.output_on = on;
        hw.drive(on);
        sink.emit(&AppEvent::OutputChanged { on, source });
    }
}
