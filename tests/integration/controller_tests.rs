//! Integration tests for the button → debounce → output pipeline.
//!
//! These run on the host (x86_64) and drive the full controller with a
//! fake clock: polls every 5 ms, the default 50 ms debounce window, and
//! mock hardware recording every pin drive.

use crate::mock_hw::{EventRecorder, MockHardware, MockSerial};

use blueswitch::app::events::{AppEvent, OutputSource};
use blueswitch::app::ports::SwitchPort;
use blueswitch::app::service::OutputController;
use blueswitch::config::SystemConfig;

const POLL_MS: u64 = 5;

fn make_rig() -> (OutputController, MockHardware, MockSerial, EventRecorder) {
    let config = SystemConfig::default();
    let mut ctl = OutputController::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = EventRecorder::new();
    ctl.start(&mut hw, &mut sink);
    (ctl, hw, MockSerial::new(), sink)
}

/// Poll every 5 ms over `[from_ms, to_ms]` inclusive.
fn run(
    ctl: &mut OutputController,
    hw: &mut MockHardware,
    serial: &mut MockSerial,
    sink: &mut EventRecorder,
    from_ms: u64,
    to_ms: u64,
) {
    let mut t = from_ms;
    while t <= to_ms {
        ctl.poll(t, hw, serial, sink);
        t += POLL_MS;
    }
}

// ── Startup state ─────────────────────────────────────────────

#[test]
fn startup_drives_pin_low_before_first_poll() {
    let (ctl, hw, _serial, sink) = make_rig();

    assert!(!ctl.output_on());
    assert!(!hw.pin_on);
    assert_eq!(hw.drives, vec![false], "start() must assert the idle level");
    assert_eq!(sink.events, vec![AppEvent::Started { output_on: false }]);
}

// ── A settled press toggles exactly once ──────────────────────

#[test]
fn press_held_past_window_toggles_exactly_once() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    // Low for 100 ms, then pressed and held for 100 ms.
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 0, 95);
    assert!(!ctl.output_on());

    hw.press();
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 100, 200);

    assert!(ctl.output_on(), "debounced press must toggle the output on");
    assert!(hw.pin_on);
    assert_eq!(
        sink.output_changes(),
        vec![&AppEvent::OutputChanged {
            on: true,
            source: OutputSource::Button
        }],
        "exactly one flip, false → true"
    );
}

#[test]
fn holding_the_button_never_retoggles() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    hw.press();
    // Held two hundred windows long.
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 0, 10_000);

    assert!(ctl.output_on());
    assert_eq!(
        sink.output_changes().len(),
        1,
        "holding must not produce repeat toggles"
    );
}

// ── Bounce handling ───────────────────────────────────────────

#[test]
fn bounce_burst_delays_then_toggles_once() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    // Rest low for 100 ms.
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 0, 95);

    // Contact chatter inside a 10 ms window, then the line holds high.
    hw.press();
    ctl.poll(100, &mut hw, &mut serial, &mut sink);
    hw.release();
    ctl.poll(105, &mut hw, &mut serial, &mut sink);
    hw.press();
    ctl.poll(110, &mut hw, &mut serial, &mut sink);

    // 50 ms after the last observed flip: still settling.
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 115, 160);
    assert!(
        !ctl.output_on(),
        "no toggle until 50 ms of continuous high after the last bounce"
    );

    // One poll past the window: exactly one toggle.
    ctl.poll(165, &mut hw, &mut serial, &mut sink);
    assert!(ctl.output_on());

    run(&mut ctl, &mut hw, &mut serial, &mut sink, 170, 300);
    assert_eq!(sink.output_changes().len(), 1);
}

// ── Full press cycles alternate the output ────────────────────

#[test]
fn press_release_press_toggles_on_then_off() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    hw.press();
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 0, 100);
    assert!(ctl.output_on(), "first press turns the output on");

    hw.release();
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 105, 195);

    hw.press();
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 200, 300);
    assert!(!ctl.output_on(), "second press toggles back off");

    assert_eq!(
        sink.output_changes(),
        vec![
            &AppEvent::OutputChanged {
                on: true,
                source: OutputSource::Button
            },
            &AppEvent::OutputChanged {
                on: false,
                source: OutputSource::Button
            },
        ]
    );
}

// ── Same-cycle arbitration ────────────────────────────────────

#[test]
fn serial_command_wins_within_a_single_poll() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    // Press settles so the rising edge lands on the t=55 poll, which is
    // also the first poll to see the queued '0'.
    hw.press();
    run(&mut ctl, &mut hw, &mut serial, &mut sink, 0, 50);
    assert!(!ctl.output_on());

    serial.send(b"0");
    ctl.poll(55, &mut hw, &mut serial, &mut sink);

    assert!(!ctl.output_on(), "the serial command has the last word");
    assert!(!hw.pin_on);
    assert_eq!(
        hw.drives,
        vec![false, true, false],
        "button drove high, serial immediately forced low"
    );
    assert_eq!(
        sink.output_changes(),
        vec![
            &AppEvent::OutputChanged {
                on: true,
                source: OutputSource::Button
            },
            &AppEvent::OutputChanged {
                on: false,
                source: OutputSource::Serial
            },
        ]
    );
}

// ── Pin / state lockstep ──────────────────────────────────────

#[test]
fn pin_and_state_never_diverge() {
    let (mut ctl, mut hw, mut serial, mut sink) = make_rig();

    serial.send(b"1z01");
    let mut t = 0u64;
    for step in 0..200u64 {
        // Wiggle the button with a period long enough to settle sometimes.
        if step % 23 == 0 {
            hw.button_level = !hw.button_level;
        }
        ctl.poll(t, &mut hw, &mut serial, &mut sink);
        assert_eq!(
            ctl.output_on(),
            hw.is_on(),
            "logical state and pin diverged at t={t}"
        );
        t += POLL_MS;
    }
}
