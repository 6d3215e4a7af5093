//! Peripheral drivers and one-shot hardware initialisation.

pub mod button;
pub mod hc05;
pub mod hw_init;
pub mod relay;
pub mod watchdog;
