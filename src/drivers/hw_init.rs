//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions and the HC-05 UART using raw ESP-IDF sys
//! calls.  Called once from `main()` before the poll loop starts.
//!
//! Off-target the same functions run against an in-memory simulation:
//! settable pin levels plus a bounded serial RX ring, so drivers and the
//! control loop behave identically in host tests.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartInitFailed(rc) => write!(f, "UART init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals(serial_baud: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the poll loop; single-threaded.
    unsafe {
        init_gpio()?;
        init_uart(serial_baud)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_serial_baud: u32) -> Result<(), HwInitError> {
    sim::reset();
    log::info!("hw_init(sim): simulated peripherals reset");
    Ok(())
}

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio() -> Result<(), HwInitError> {
    // Button: plain input.  The board carries an external pull-down, so
    // both internal pulls stay off.  Polled, no interrupt.
    let btn_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&btn_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    let out_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::SWITCH_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&out_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    // Relay is active-high: start de-energised.
    unsafe { gpio_set_level(pins::SWITCH_GPIO, 0) };

    info!("hw_init: GPIO configured (button={}, switch={})", pins::BUTTON_GPIO, pins::SWITCH_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    sim::gpio_read(pin)
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    sim::gpio_write(pin, high);
}

// ── UART (HC-05 link) ─────────────────────────────────────────

/// Driver-side RX ring size.  Commands are one byte, so even a chatty
/// sender stays far below this.
#[cfg(target_os = "espidf")]
const UART_RX_BUF_BYTES: i32 = 256;

#[cfg(target_os = "espidf")]
unsafe fn init_uart(baud: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        rx_flow_ctrl_thresh: 0,
        ..Default::default()
    };

    // SAFETY: UART1 is configured once here, before the poll loop, and
    // accessed only from the main task afterwards.
    let ret = unsafe {
        uart_driver_install(
            pins::HC05_UART_NUM as i32,
            UART_RX_BUF_BYTES,
            0, // no TX ring; the link is receive-only
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    let ret = unsafe { uart_param_config(pins::HC05_UART_NUM as i32, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    let ret = unsafe {
        uart_set_pin(
            pins::HC05_UART_NUM as i32,
            pins::HC05_TX_GPIO,
            pins::HC05_RX_GPIO,
            -1, // RTS unused
            -1, // CTS unused
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    info!("hw_init: UART{} configured at {} baud 8N1", pins::HC05_UART_NUM, baud);
    Ok(())
}

/// Bytes waiting in the UART RX ring.
#[cfg(target_os = "espidf")]
pub fn uart_rx_available() -> usize {
    let mut len: usize = 0;
    // SAFETY: driver installed in init_uart(); main-loop access only.
    let ret = unsafe { uart_get_buffered_data_len(pins::HC05_UART_NUM as i32, &mut len) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    len
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_rx_available() -> usize {
    sim::uart_rx_available()
}

/// Pop one byte from the RX ring without blocking.
#[cfg(target_os = "espidf")]
pub fn uart_read_byte() -> Option<u8> {
    let mut byte: u8 = 0;
    // SAFETY: driver installed in init_uart(); zero tick wait keeps the
    // poll loop non-blocking.
    let n = unsafe {
        uart_read_bytes(
            pins::HC05_UART_NUM as i32,
            (&raw mut byte).cast::<core::ffi::c_void>(),
            1,
            0,
        )
    };
    if n == 1 { Some(byte) } else { None }
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_read_byte() -> Option<u8> {
    sim::uart_read_byte()
}

// ── Host simulation backend ───────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicBool, Ordering};

    use crate::pins;

    static BUTTON_LEVEL: AtomicBool = AtomicBool::new(false);
    static OUTPUT_LEVEL: AtomicBool = AtomicBool::new(false);

    /// Simulated HC-05 RX ring.  Bounded like the real driver ring; a
    /// byte arriving when it is full is dropped.
    static UART_RX: std::sync::Mutex<heapless::Deque<u8, 64>> =
        std::sync::Mutex::new(heapless::Deque::new());

    pub(super) fn gpio_read(pin: i32) -> bool {
        if pin == pins::BUTTON_GPIO {
            BUTTON_LEVEL.load(Ordering::Relaxed)
        } else {
            OUTPUT_LEVEL.load(Ordering::Relaxed)
        }
    }

    pub(super) fn gpio_write(pin: i32, high: bool) {
        if pin == pins::SWITCH_GPIO {
            OUTPUT_LEVEL.store(high, Ordering::Relaxed);
        }
    }

    pub(super) fn uart_rx_available() -> usize {
        UART_RX.lock().map_or(0, |q| q.len())
    }

    pub(super) fn uart_read_byte() -> Option<u8> {
        UART_RX.lock().ok().and_then(|mut q| q.pop_front())
    }

    /// Set the raw level the simulated button pin reads.
    pub fn set_button_level(high: bool) {
        BUTTON_LEVEL.store(high, Ordering::Relaxed);
    }

    /// Level last driven onto the simulated switch pin.
    pub fn output_level() -> bool {
        OUTPUT_LEVEL.load(Ordering::Relaxed)
    }

    /// Queue inbound serial bytes, as if the HC-05 had received them.
    pub fn queue_serial(bytes: &[u8]) {
        if let Ok(mut q) = UART_RX.lock() {
            for &b in bytes {
                let _ = q.push_back(b);
            }
        }
    }

    /// Drop all simulated state back to power-on defaults.
    pub(super) fn reset() {
        BUTTON_LEVEL.store(false, Ordering::Relaxed);
        OUTPUT_LEVEL.store(false, Ordering::Relaxed);
        if let Ok(mut q) = UART_RX.lock() {
            q.clear();
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub use sim::{
    output_level as sim_output_level, queue_serial as sim_queue_serial,
    set_button_level as sim_set_button_level,
};
