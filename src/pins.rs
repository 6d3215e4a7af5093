//! GPIO / peripheral pin assignments for the BlueSwitch main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// User button (active-high with external pull-down)
// ---------------------------------------------------------------------------

/// Momentary push-button for manual toggling.
/// HIGH = pressed; a 10 kΩ resistor to GND holds the line LOW at rest.
pub const BUTTON_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Switched output (relay module, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output driving the relay coil transistor.  HIGH = load on.
pub const SWITCH_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// HC-05 Bluetooth serial bridge (UART1)
// ---------------------------------------------------------------------------

/// UART1 TX → HC-05 RXD (through the module's level divider).
pub const HC05_TX_GPIO: i32 = 17;
/// UART1 RX ← HC-05 TXD.
pub const HC05_RX_GPIO: i32 = 18;
/// UART port number used for the HC-05 link.
pub const HC05_UART_NUM: u32 = 1;
