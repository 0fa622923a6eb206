//! Fuzz target: `twin::read_temp_message` / `twin::read_hum_message`
//!
//! Asserts the command extractors never panic and only ever return
//! finite values.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use libfuzzer_sys::fuzz_target;

use envnode::twin::{read_hum_message, read_temp_message};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = read_temp_message(raw) {
        assert!(value.is_finite(), "extracted value must be finite");
    }
    if let Ok(value) = read_hum_message(raw) {
        assert!(value.is_finite(), "extracted value must be finite");
    }
});
