//! Visible feedback and reporting-cadence queries.
//!
//! [`FeedbackController`] sits between the device state and the user
//! LED. The reporting loop calls it after each telemetry send; the
//! indicator and delay ports are injected at the call sites so the whole
//! controller runs against mocks on the host.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::SystemConfig;
use crate::state::SharedDeviceState;

/// Write-side port for the user feedback LED.
///
/// [`StatusLed`](crate::drivers::status_led::StatusLed) implements this
/// on the device; tests record the on/off transitions instead.
pub trait IndicatorPort {
    fn set_indicator(&mut self, on: bool);
}

/// Drives blink patterns from device-state transitions and answers the
/// reporting loop's "what interval right now" query.
pub struct FeedbackController<'a> {
    state: &'a SharedDeviceState,
    blink_pulse_ms: u32,
    confirm_pulse_ms: u32,
    confirm_pulses: u8,
}

impl<'a> FeedbackController<'a> {
    pub fn new(state: &'a SharedDeviceState, config: &SystemConfig) -> Self {
        Self {
            state,
            blink_pulse_ms: config.blink_pulse_ms,
            confirm_pulse_ms: config.confirm_pulse_ms,
            confirm_pulses: config.confirm_pulses,
        }
    }

    /// One unconditional blink — a general-purpose feedback primitive,
    /// not gated on the confirmation signal.
    pub fn blink_led(&self, led: &mut impl IndicatorPort, delay: &mut impl DelayNs) {
        pulse(led, delay, self.blink_pulse_ms);
    }

    /// The acknowledgement pattern, invoked after a successful telemetry
    /// send or after consuming a raised confirmation signal.
    ///
    /// Always clears the confirmation signal once the pattern completes,
    /// regardless of why it was invoked, so indicator patterns cannot
    /// stack indefinitely.
    pub fn blink_send_confirmation(&self, led: &mut impl IndicatorPort, delay: &mut impl DelayNs) {
        for _ in 0..self.confirm_pulses {
            pulse(led, delay, self.confirm_pulse_ms);
            delay.delay_ms(self.confirm_pulse_ms);
        }
        self.state.clear_confirmation();
        debug!("feedback: confirmation blink complete");
    }

    /// Current reporting interval in seconds. Pure accessor — no
    /// blocking, no failure mode, always a valid positive value.
    pub fn interval_secs(&self) -> u32 {
        self.state.interval_secs()
    }
}

fn pulse(led: &mut impl IndicatorPort, delay: &mut impl DelayNs, on_ms: u32) {
    led.set_indicator(true);
    delay.delay_ms(on_ms);
    led.set_indicator(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every indicator transition for assertion.
    struct RecordingIndicator {
        transitions: Vec<bool>,
    }

    impl RecordingIndicator {
        fn new() -> Self {
            Self {
                transitions: Vec::new(),
            }
        }
    }

    impl IndicatorPort for RecordingIndicator {
        fn set_indicator(&mut self, on: bool) {
            self.transitions.push(on);
        }
    }

    /// Delay that only counts requested milliseconds.
    struct CountingDelay {
        total_ms: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }
    }

    fn fixture(config: &SystemConfig) -> (SharedDeviceState, RecordingIndicator, CountingDelay) {
        (
            SharedDeviceState::new(config),
            RecordingIndicator::new(),
            CountingDelay { total_ms: 0 },
        )
    }

    #[test]
    fn blink_led_is_one_pulse() {
        let config = SystemConfig::default();
        let (state, mut led, mut delay) = fixture(&config);
        let feedback = FeedbackController::new(&state, &config);

        feedback.blink_led(&mut led, &mut delay);
        assert_eq!(led.transitions, vec![true, false]);
        assert_eq!(delay.total_ms, config.blink_pulse_ms);
    }

    #[test]
    fn blink_led_does_not_touch_the_confirmation_signal() {
        let config = SystemConfig::default();
        let (state, mut led, mut delay) = fixture(&config);
        state.try_apply_interval(30);
        let feedback = FeedbackController::new(&state, &config);

        feedback.blink_led(&mut led, &mut delay);
        assert!(state.confirmation_pending());
    }

    #[test]
    fn confirmation_blink_clears_a_raised_signal() {
        let config = SystemConfig::default();
        let (state, mut led, mut delay) = fixture(&config);
        state.try_apply_interval(30);
        let feedback = FeedbackController::new(&state, &config);

        feedback.blink_send_confirmation(&mut led, &mut delay);
        assert!(!state.confirmation_pending());
        // Two pulses, each an on/off pair, LED ends dark.
        assert_eq!(led.transitions, vec![true, false, true, false]);
        assert_eq!(led.transitions.last(), Some(&false));
    }

    #[test]
    fn confirmation_blink_clears_even_when_nothing_was_raised() {
        let config = SystemConfig::default();
        let (state, mut led, mut delay) = fixture(&config);
        let feedback = FeedbackController::new(&state, &config);

        feedback.blink_send_confirmation(&mut led, &mut delay);
        assert!(!state.confirmation_pending());
    }

    #[test]
    fn interval_query_tracks_device_state() {
        let config = SystemConfig::default();
        let (state, _, _) = fixture(&config);
        let feedback = FeedbackController::new(&state, &config);

        assert_eq!(feedback.interval_secs(), config.default_report_interval_secs);
        state.try_apply_interval(30);
        assert_eq!(feedback.interval_secs(), 30);
    }
}
