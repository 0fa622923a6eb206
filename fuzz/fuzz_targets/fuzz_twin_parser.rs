//! Fuzz target: `twin::handle_twin_message`
//!
//! Drives arbitrary text through both lookup strategies and asserts
//! that the parser never panics and that every failure path leaves the
//! device state exactly as it was.
//!
//! cargo fuzz run fuzz_twin_parser

#![no_main]

use libfuzzer_sys::fuzz_target;

use envnode::config::SystemConfig;
use envnode::state::SharedDeviceState;
use envnode::twin::{handle_twin_message, TwinOutcome, TwinUpdateKind};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    for kind in [TwinUpdateKind::Complete, TwinUpdateKind::Partial] {
        let state = SharedDeviceState::new(&SystemConfig::default());
        let before = state.interval_secs();

        match handle_twin_message(kind, raw, &state) {
            Ok(TwinOutcome::Applied(secs)) => {
                assert!(secs > 0, "applied interval must be positive");
                assert_eq!(state.interval_secs(), secs);
            }
            Ok(TwinOutcome::Unchanged) | Err(_) => {
                assert_eq!(
                    state.interval_secs(),
                    before,
                    "failed parse must not mutate state"
                );
            }
        }
    }
});
