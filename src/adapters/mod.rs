//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to              |
//! |------------|-------------|--------------------------|
//! | `hardware` | ButtonPort  | ESP32 GPIO input         |
//! |            | SwitchPort  | ESP32 GPIO output        |
//! | `serial`   | CommandPort | HC-05 UART RX stream     |
//! | `log_sink` | EventSink   | Serial log output        |
//! | `time`     | —           | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
