//! Integration tests for the serial command channel.
//!
//! Single ASCII digits over the HC-05 bridge: `'1'` on, `'0'` off, one
//! byte consumed per poll, everything else dropped on the floor.

use crate::mock_hw::{EventRecorder, MockHardware, MockSerial};

use blueswitch::app::events::{AppEvent, OutputSource};
use blueswitch::app::service::OutputController;
use blueswitch::config::SystemConfig;

fn make_rig() -> (OutputController, MockHardware, MockSerial, EventRecorder) {
    let config = SystemConfig::default();
    let mut ctl = OutputController::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = EventRecorder::new();
    ctl.start(&mut hw, &mut sink);
    (ctl, hw, MockSerial::new(), sink)
}

// ── Basic on/off ──────────────────────────────────────────────

#[test]
fn one_switches_on_at_the_next_poll() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"1");
    ctl.poll(5, &mut hw, &mut serial, &mut sink);

    assert!(ctl.output_on(), "'1' must take effect on the very next poll");
    assert!(hw.pin_on);
    assert_eq!(
        sink.output_changes(),
        vec![&AppEvent::OutputChanged {
            on: true,
            source: OutputSource::Serial
        }]
    );
}

#[test]
fn zero_switches_off_symmetrically() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"1");
    ctl.poll(5, &mut hw, &mut serial, &mut sink);
    assert!(ctl.output_on());

    serial.send(b"0");
    ctl.poll(10, &mut hw, &mut serial, &mut sink);
    assert!(!ctl.output_on());
    assert!(!hw.pin_on);
}

// ── Unknown bytes ─────────────────────────────────────────────

#[test]
fn unrecognised_bytes_are_dropped_without_effect() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"ax\r\n\x002");
    for t in 1..=6u64 {
        ctl.poll(t * 5, &mut hw, &mut serial, &mut sink);
    }

    assert!(!ctl.output_on(), "garbage must never flip the output");
    assert!(sink.output_changes().is_empty());
    assert_eq!(serial.pending(), 0, "garbage is still consumed");

    let t = ctl.telemetry(1);
    assert_eq!(t.serial_ignored, 6);
    assert_eq!(t.serial_accepted, 0);
}

// ── One byte per poll ─────────────────────────────────────────

#[test]
fn backlog_drains_one_byte_per_poll() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"101");
    ctl.poll(5, &mut hw, &mut serial, &mut sink);
    assert!(ctl.output_on());
    assert_eq!(serial.pending(), 2);

    ctl.poll(10, &mut hw, &mut serial, &mut sink);
    assert!(!ctl.output_on());
    assert_eq!(serial.pending(), 1);

    ctl.poll(15, &mut hw, &mut serial, &mut sink);
    assert!(ctl.output_on());
    assert_eq!(serial.pending(), 0);
}

#[test]
fn last_command_in_a_stream_wins() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"1100110");
    for t in 1..=10u64 {
        ctl.poll(t * 5, &mut hw, &mut serial, &mut sink);
    }

    assert!(!ctl.output_on());
    assert!(!hw.pin_on);
}

// ── Serial overrides button-set state ─────────────────────────

#[test]
fn zero_overrides_a_button_set_output() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    // Debounced press turns the output on.
    hw.press();
    let mut t = 0u64;
    while t <= 100 {
        ctl.poll(t, &mut hw, &mut serial, &mut sink);
        t += 5;
    }
    assert!(ctl.output_on());

    // Button still held; '0' must win regardless.
    serial.send(b"0");
    ctl.poll(105, &mut hw, &mut serial, &mut sink);
    assert!(!ctl.output_on(), "serial off overrides button-driven state");
    assert!(!hw.pin_on);
    assert_eq!(
        sink.output_changes().last(),
        Some(&&AppEvent::OutputChanged {
            on: false,
            source: OutputSource::Serial
        })
    );
}

// ── Idempotent re-assertion ───────────────────────────────────

#[test]
fn repeated_one_redrives_pin_but_emits_once() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"111");
    for t in 1..=3u64 {
        ctl.poll(t * 5, &mut hw, &mut serial, &mut sink);
    }

    assert!(ctl.output_on());
    // start() drove low, then three accepted commands each drove high.
    assert_eq!(hw.drives, vec![false, true, true, true]);
    assert_eq!(
        sink.output_changes().len(),
        1,
        "re-asserting the held level is not a change"
    );

    let t = ctl.telemetry(1);
    assert_eq!(t.serial_accepted, 3);
}
