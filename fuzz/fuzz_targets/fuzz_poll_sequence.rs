//! Fuzz target: `OutputController::poll`
//!
//! Decodes the fuzz input into an arbitrary interleaving of button levels
//! and serial bytes, drives the controller through it and verifies:
//! - No panics under any input sequence
//! - The commanded pin level equals the logical output after every poll
//! - Serial bytes are consumed at most one per poll and every consumed
//!   byte lands in exactly one telemetry counter
//!
//! cargo fuzz run fuzz_poll_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;

use blueswitch::app::events::AppEvent;
use blueswitch::app::ports::{ButtonPort, CommandPort, EventSink, SwitchPort};
use blueswitch::app::service::OutputController;
use blueswitch::config::SystemConfig;

// ── Inline ports for fuzz testing ─────────────────────────────

struct FuzzHw {
    button: bool,
    pin: bool,
}

impl ButtonPort for FuzzHw {
    fn read_raw(&mut self) -> bool {
        self.button
    }
}

impl SwitchPort for FuzzHw {
    fn drive(&mut self, on: bool) {
        self.pin = on;
    }

    fn is_on(&self) -> bool {
        self.pin
    }
}

struct FuzzSerial {
    queue: std::collections::VecDeque<u8>,
    queued_total: u32,
}

impl FuzzSerial {
    fn push(&mut self, byte: u8) {
        self.queue.push_back(byte);
        self.queued_total += 1;
    }
}

impl CommandPort for FuzzSerial {
    fn available(&self) -> usize {
        self.queue.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.queue.pop_front()
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut ctl = OutputController::new(&SystemConfig::default());
    let mut hw = FuzzHw {
        button: false,
        pin: false,
    };
    let mut serial = FuzzSerial {
        queue: std::collections::VecDeque::new(),
        queued_total: 0,
    };
    let mut sink = NullSink;
    ctl.start(&mut hw, &mut sink);

    // Each control byte sets the button level (bit 0) and optionally
    // queues the following byte as serial traffic (bit 1).
    let mut now_ms = 0u64;
    let mut polls = 0u64;
    let mut iter = data.iter();
    while let Some(ctrl) = iter.next() {
        hw.button = ctrl & 0x01 != 0;
        if ctrl & 0x02 != 0 {
            if let Some(byte) = iter.next() {
                serial.push(*byte);
            }
        }

        now_ms += 5;
        ctl.poll(now_ms, &mut hw, &mut serial, &mut sink);
        polls += 1;

        assert_eq!(
            ctl.output_on(),
            hw.pin,
            "pin diverged from logical state after poll {polls}"
        );
    }

    let t = ctl.telemetry(0);
    let consumed = serial.queued_total - serial.queue.len() as u32;
    assert_eq!(
        t.serial_accepted + t.serial_ignored,
        consumed,
        "counters do not account for every consumed byte"
    );
    assert!(
        u64::from(t.serial_accepted + t.serial_ignored) <= polls,
        "more than one byte consumed per poll"
    );
    assert_eq!(t.poll_count, polls);
});
