//! Device-twin document interpretation.
//!
//! Locates the reporting-interval key in a desired-state document and,
//! when it carries a valid value, drives the one defined
//! [`DeviceState`](crate::state::DeviceState) transition. Absence of the
//! key is not an error — the cloud may update unrelated properties.

use log::{info, warn};
use serde_json::Value;

use crate::error::TwinError;
use crate::state::SharedDeviceState;

/// Top-level object holding desired properties in a complete snapshot.
const DESIRED_KEY: &str = "desired";
/// The one interpreted desired property.
const INTERVAL_KEY: &str = "interval";

/// Which lookup strategy a twin document requires.
///
/// A complete snapshot carries the full twin (desired + reported
/// sections); a partial update carries only the changed desired
/// properties at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinUpdateKind {
    /// Full twin snapshot — the interval lives under `"desired"`.
    Complete,
    /// Delta update — the interval lives at the document root.
    Partial,
}

/// What a successfully parsed twin document did to the device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinOutcome {
    /// A valid interval was found and applied (seconds).
    Applied(u32),
    /// The document is valid but carries no interval key; the state was
    /// left untouched.
    Unchanged,
}

/// Interpret one twin document and apply its interval, if any.
///
/// At most one state mutation happens per call, and only on
/// `Ok(TwinOutcome::Applied(_))` — every failure path leaves the state
/// exactly as it was. Re-applying the same valid interval is accepted
/// and raises the confirmation signal again.
pub fn handle_twin_message(
    kind: TwinUpdateKind,
    raw: &str,
    state: &SharedDeviceState,
) -> Result<TwinOutcome, TwinError> {
    let doc: Value = serde_json::from_str(raw).map_err(|_| TwinError::Malformed)?;

    let Some(value) = locate_interval(kind, &doc) else {
        return Ok(TwinOutcome::Unchanged);
    };

    let secs = validate_interval(value)?;
    if !state.try_apply_interval(secs) {
        warn!("twin: interval {secs}s below configured minimum, rejected");
        return Err(TwinError::InvalidInterval);
    }

    info!("twin: reporting interval set to {secs}s");
    Ok(TwinOutcome::Applied(secs))
}

/// Find the interval value at the nesting level the update kind dictates.
///
/// A complete snapshot with `"interval"` at the root (instead of under
/// `"desired"`) does not match — the key must sit at the expected level.
fn locate_interval(kind: TwinUpdateKind, doc: &Value) -> Option<&Value> {
    match kind {
        TwinUpdateKind::Complete => doc.get(DESIRED_KEY)?.get(INTERVAL_KEY),
        TwinUpdateKind::Partial => doc.get(INTERVAL_KEY),
    }
}

/// A syntactically valid interval is a positive JSON integer that fits
/// in `u32`. Floats, strings, zero and negatives are all rejected.
fn validate_interval(value: &Value) -> Result<u32, TwinError> {
    let secs = value.as_u64().ok_or(TwinError::InvalidInterval)?;
    if secs == 0 || secs > u64::from(u32::MAX) {
        return Err(TwinError::InvalidInterval);
    }
    Ok(secs as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SystemConfig;

    fn shared() -> SharedDeviceState {
        SharedDeviceState::new(&SystemConfig::default())
    }

    #[test]
    fn complete_snapshot_applies_interval() {
        let state = shared();
        let doc = r#"{"desired": {"interval": 30, "other": true}, "reported": {}}"#;

        let outcome = handle_twin_message(TwinUpdateKind::Complete, doc, &state);
        assert_eq!(outcome, Ok(TwinOutcome::Applied(30)));
        assert_eq!(state.interval_secs(), 30);
        assert!(state.confirmation_pending());
    }

    #[test]
    fn partial_update_applies_interval() {
        let state = shared();

        let outcome = handle_twin_message(TwinUpdateKind::Partial, r#"{"interval": 7}"#, &state);
        assert_eq!(outcome, Ok(TwinOutcome::Applied(7)));
        assert_eq!(state.interval_secs(), 7);
        assert!(state.confirmation_pending());
    }

    #[test]
    fn absent_key_leaves_state_untouched() {
        let state = shared();
        let before = state.interval_secs();

        let outcome = handle_twin_message(
            TwinUpdateKind::Partial,
            r#"{"brightness": 80}"#,
            &state,
        );
        assert_eq!(outcome, Ok(TwinOutcome::Unchanged));
        assert_eq!(state.interval_secs(), before);
        assert!(!state.confirmation_pending());
    }

    #[test]
    fn complete_lookup_ignores_root_level_interval() {
        // A complete snapshot must carry the interval under "desired";
        // one at the root is not at the expected nesting level.
        let state = shared();
        let before = state.interval_secs();

        let outcome =
            handle_twin_message(TwinUpdateKind::Complete, r#"{"interval": 30}"#, &state);
        assert_eq!(outcome, Ok(TwinOutcome::Unchanged));
        assert_eq!(state.interval_secs(), before);
        assert!(!state.confirmation_pending());
    }

    #[test]
    fn malformed_document_reports_structural_failure() {
        let state = shared();
        let before = state.interval_secs();

        for doc in [r#"{"desired": {"interval"#, "", "not json at all"] {
            let outcome = handle_twin_message(TwinUpdateKind::Complete, doc, &state);
            assert_eq!(outcome, Err(TwinError::Malformed), "doc: {doc:?}");
        }
        assert_eq!(state.interval_secs(), before);
        assert!(!state.confirmation_pending());
    }

    #[test]
    fn invalid_interval_values_are_rejected_without_partial_application() {
        let state = shared();
        let before = state.interval_secs();

        for doc in [
            r#"{"interval": 0}"#,
            r#"{"interval": -5}"#,
            r#"{"interval": 2.5}"#,
            r#"{"interval": "30"}"#,
            r#"{"interval": null}"#,
            r#"{"interval": true}"#,
            r#"{"interval": 4294967296}"#,
        ] {
            let outcome = handle_twin_message(TwinUpdateKind::Partial, doc, &state);
            assert_eq!(outcome, Err(TwinError::InvalidInterval), "doc: {doc:?}");
        }
        assert_eq!(state.interval_secs(), before);
        assert!(!state.confirmation_pending());
    }

    #[test]
    fn below_minimum_interval_is_a_value_failure() {
        let mut config = SystemConfig::default();
        config.min_report_interval_secs = 10;
        let state = SharedDeviceState::new(&config);

        let outcome = handle_twin_message(TwinUpdateKind::Partial, r#"{"interval": 5}"#, &state);
        assert_eq!(outcome, Err(TwinError::InvalidInterval));
        assert_eq!(state.interval_secs(), config.default_report_interval_secs);
    }

    #[test]
    fn duplicate_update_is_idempotent_for_the_interval() {
        let state = shared();
        let doc = r#"{"interval": 45}"#;

        assert_eq!(
            handle_twin_message(TwinUpdateKind::Partial, doc, &state),
            Ok(TwinOutcome::Applied(45))
        );
        state.clear_confirmation();
        assert_eq!(
            handle_twin_message(TwinUpdateKind::Partial, doc, &state),
            Ok(TwinOutcome::Applied(45))
        );
        assert_eq!(state.interval_secs(), 45);
    }

    #[test]
    fn non_object_documents_carry_no_interval() {
        let state = shared();
        for doc in ["5", "[1, 2, 3]", r#""interval""#] {
            let outcome = handle_twin_message(TwinUpdateKind::Partial, doc, &state);
            assert_eq!(outcome, Ok(TwinOutcome::Unchanged), "doc: {doc:?}");
        }
    }
}
