//! Fuzz target: `Command::from_byte`
//!
//! Feeds arbitrary bytes through the serial command parser and asserts
//! that it never panics, accepts exactly the two documented command
//! bytes, and maps each to the correct output level.
//!
//! cargo fuzz run fuzz_command_bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use blueswitch::app::commands::{Command, CMD_OFF, CMD_ON};

fuzz_target!(|data: &[u8]| {
    for &byte in data {
        match Command::from_byte(byte) {
            Some(cmd) => {
                assert!(
                    byte == CMD_ON || byte == CMD_OFF,
                    "parser accepted undocumented byte 0x{byte:02x}"
                );
                assert_eq!(cmd.output_on(), byte == CMD_ON);
            }
            None => {
                assert!(
                    byte != CMD_ON && byte != CMD_OFF,
                    "parser rejected command byte 0x{byte:02x}"
                );
            }
        }
    }
});
