//! BlueSwitch Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │  HardwareAdapter      SerialCommands    LogEventSink │
//! │  (Button+Switch)      (CommandPort)     (EventSink)  │
//! │                                                      │
//! │  ───────────── Port Trait Boundary ────────────      │
//! │                                                      │
//! │  ┌────────────────────────────────────────────┐      │
//! │  │       OutputController (pure logic)        │      │
//! │  │       Debounce · Two-source arbiter        │      │
//! │  └────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod debounce;
mod pins;

pub mod app;
mod adapters;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::serial::SerialCommands;
use adapters::time::MonotonicClock;
use app::events::AppEvent;
use app::ports::EventSink;
use app::service::OutputController;
use config::SystemConfig;
use drivers::button::ButtonDriver;
use drivers::hc05::Hc05Driver;
use drivers::relay::RelayDriver;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  BlueSwitch v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals(config.serial_baud) {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();
    let clock = MonotonicClock::new();

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        ButtonDriver::new(pins::BUTTON_GPIO),
        RelayDriver::new(pins::SWITCH_GPIO),
    );
    let mut serial = SerialCommands::new(Hc05Driver::new(config.serial_baud));
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct the controller ───────────────────────────
    let mut controller = OutputController::new(&config);
    controller.start(&mut hw, &mut log_sink);

    info!("System ready. Entering poll loop.");

    // ── 6. Poll loop ──────────────────────────────────────────
    let mut last_telemetry_secs: u64 = 0;

    loop {
        // Pace the loop.  FreeRTOS delay yields the CPU on hardware;
        // plain sleep stands in on the host.
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.poll_interval_ms);
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(
            config.poll_interval_ms as u64,
        ));

        let now_ms = clock.now_ms();
        controller.poll(now_ms, &mut hw, &mut serial, &mut log_sink);

        let uptime_secs = clock.uptime_secs();
        if uptime_secs.saturating_sub(last_telemetry_secs) >= config.telemetry_interval_secs as u64
        {
            let t = controller.telemetry(uptime_secs);
            log_sink.emit(&AppEvent::Telemetry(t));
            last_telemetry_secs = uptime_secs;
        }

        // Feed watchdog on every iteration.
        watchdog.feed();
    }
}
