//! Monotonic clock adapter.
//!
//! The controller never reads time itself; the poll loop samples this
//! adapter once per cycle and passes the timestamp in.  Backed by the
//! ESP high-resolution timer on target and by `std::time::Instant` on
//! the host, so host tests and firmware share one time model.

/// Milliseconds-since-boot source for the poll loop and telemetry.
pub struct MonotonicClock {
    #[cfg(not(target_os = "espidf"))]
    origin: std::time::Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            origin: std::time::Instant::now(),
        }
    }

    /// Monotonic milliseconds since boot; feeds the debounce window.
    pub fn now_ms(&self) -> u64 {
        self.micros() / 1_000
    }

    /// Whole seconds since boot; paces telemetry.
    pub fn uptime_secs(&self) -> u64 {
        self.micros() / 1_000_000
    }

    #[cfg(target_os = "espidf")]
    fn micros(&self) -> u64 {
        // esp_timer counts from boot and never wraps in practice (u64 µs).
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    #[cfg(not(target_os = "espidf"))]
    fn micros(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
