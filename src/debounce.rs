//! Time-window debouncer for a sampled digital input.
//!
//! ## Algorithm
//!
//! Two levels are tracked: the last *raw* sample and the adopted *stable*
//! level.  Every observed raw change restarts the settle window.  Once
//! strictly more than `settle_ms` has passed since the last observed
//! change, the current reading is trusted: if it differs from the stable
//! level it is adopted and the transition reported as an [`Edge`].
//!
//! Adoption is level-sensitive rather than edge-latched: the window only
//! restarts on changes the sampler actually observes, so bounce shorter
//! than one poll interval is invisible.  At a 5 ms poll rate and a 50 ms
//! window this is of no practical consequence for mechanical switches.
//!
//! The initial stable level is low.  An input already high at construction
//! reads as a rising edge once the first window expires.

/// A debounced level transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Stable level went low → high.
    Rising,
    /// Stable level went high → low.
    Falling,
}

/// Debounce state for one digital input.
///
/// Feed it one sample per poll via [`Debouncer::sample`]; it owns no
/// hardware and never blocks, so it runs identically on target and host.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Settle window in milliseconds.
    settle_ms: u64,
    /// Last raw sample, updated every call.
    last_raw: bool,
    /// Adopted stable level.
    stable: bool,
    /// Timestamp of the last observed raw change.
    last_change_ms: u64,
}

impl Debouncer {
    pub fn new(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            last_raw: false,
            stable: false,
            last_change_ms: 0,
        }
    }

    /// Feed one raw sample taken at `now_ms` (monotonic milliseconds).
    ///
    /// Returns the debounced transition if the stable level changed on
    /// this sample, `None` otherwise.
    pub fn sample(&mut self, reading: bool, now_ms: u64) -> Option<Edge> {
        if reading != self.last_raw {
            // Raw flip: restart settling, whichever direction it went.
            self.last_change_ms = now_ms;
        }

        let mut edge = None;
        if now_ms.saturating_sub(self.last_change_ms) > self.settle_ms && reading != self.stable {
            self.stable = reading;
            edge = Some(if reading { Edge::Rising } else { Edge::Falling });
        }

        // Unconditional, so the next flip is detected even if this sample
        // was itself an unsettled bounce.
        self.last_raw = reading;
        edge
    }

    /// Adopted stable level.
    pub fn stable_level(&self) -> bool {
        self.stable
    }

    /// Last raw sample seen (may be mid-bounce).
    pub fn raw_level(&self) -> bool {
        self.last_raw
    }
}
