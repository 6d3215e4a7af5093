//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART0 / USB-CDC in production).
//! Nothing is ever written back over the HC-05 link; telemetry stays on
//! the console.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { output_on } => {
                info!("START | output={}", if *output_on { "ON" } else { "OFF" });
            }
            AppEvent::OutputChanged { on, source } => {
                info!(
                    "OUTPUT | {} | source={:?}",
                    if *on { "ON" } else { "OFF" },
                    source,
                );
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | output={} | uptime={}s | polls={} | \
                     toggles={} | serial_ok={} serial_drop={}",
                    if t.output_on { "ON" } else { "OFF" },
                    t.uptime_secs,
                    t.poll_count,
                    t.button_toggles,
                    t.serial_accepted,
                    t.serial_ignored,
                );
            }
        }
    }
}
