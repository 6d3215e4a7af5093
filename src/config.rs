//! System configuration parameters
//!
//! All tunable parameters for the BlueSwitch controller.  There is no
//! persistence layer; the firmware boots with `SystemConfig::default()` and
//! keeps it for the life of the process.

/// Core system configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    // --- Button ---
    /// Debounce settle window in milliseconds.  A raw level must hold for
    /// longer than this before it is trusted.
    pub debounce_ms: u64,

    // --- Serial ---
    /// Baud rate for the HC-05 link.  The module ships configured for 9600.
    pub serial_baud: u32,

    // --- Timing ---
    /// Main poll loop interval (milliseconds)
    pub poll_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Button
            debounce_ms: 50,

            // Serial
            serial_baud: 9600,

            // Timing
            poll_interval_ms: 5,
            telemetry_interval_secs: 60, // 1/min
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Called once at boot; a failure here is a
    /// build/configuration mistake, not a runtime condition.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=1000).contains(&self.debounce_ms) {
            return Err("debounce_ms must be 1–1000");
        }
        if !(1200..=115_200).contains(&self.serial_baud) {
            return Err("serial_baud must be 1200–115200");
        }
        if !(1..=100).contains(&self.poll_interval_ms) {
            return Err("poll_interval_ms must be 1–100");
        }
        if u64::from(self.poll_interval_ms) >= self.debounce_ms {
            return Err("poll_interval_ms must be < debounce_ms");
        }
        if !(5..=3600).contains(&self.telemetry_interval_secs) {
            return Err("telemetry_interval_secs must be 5–3600");
        }
        Ok(())
    }
}
