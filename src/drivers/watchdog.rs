//! Poll-loop watchdog.
//!
//! Subscribes the main task to the ESP-IDF Task Watchdog Timer (TWDT) so
//! a wedged poll loop resets the chip instead of leaving the relay frozen
//! in whatever state it last held.  The loop runs every few milliseconds;
//! missing an entire timeout window means it is gone, not busy.
//!
//! Host builds keep the same API with nothing behind it.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure, esp_task_wdt_reset, ESP_OK,
};
#[cfg(target_os = "espidf")]
use log::{info, warn};

/// Reset the chip after this long without a feed.
#[cfg(target_os = "espidf")]
const TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Configure the TWDT and subscribe the calling task.
    ///
    /// A failed subscription is logged and tolerated: the loop then runs
    /// unprotected rather than not at all.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "espidf")]
            subscribed: Self::subscribe(),
        }
    }

    #[cfg(target_os = "espidf")]
    fn subscribe() -> bool {
        let cfg = esp_task_wdt_config_t {
            timeout_ms: TIMEOUT_MS,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: reconfigure/add run once, from the main task, before
        // the poll loop starts.
        let rc = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if rc != ESP_OK {
            warn!("watchdog: reconfigure returned {rc} (TWDT may already be up)");
        }

        let rc = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
        if rc == ESP_OK {
            info!("watchdog: armed, {}s timeout", TIMEOUT_MS / 1000);
            true
        } else {
            warn!("watchdog: subscribe failed ({rc}), loop runs unprotected");
            false
        }
    }

    /// Pet the watchdog.  Called once per poll iteration.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: only ever called from the subscribed task.
            unsafe { esp_task_wdt_reset() };
        }
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}
