//! Sensor-command message extraction.
//!
//! Commands are `key:value` text (`temp:21.5`, `hum: 40`). Extraction is
//! pure — no device state, no feedback. The value passes through exactly
//! as received: no unit conversion, no clamping, sign and fraction
//! preserved.

use crate::error::CommandError;

const TEMP_KEYWORDS: [&str; 2] = ["temp", "temperature"];
const HUM_KEYWORDS: [&str; 2] = ["hum", "humidity"];

/// Extract the target value from a temperature-set command.
pub fn read_temp_message(raw: &str) -> Result<f32, CommandError> {
    read_command(raw, &TEMP_KEYWORDS)
}

/// Extract the target value from a humidity-set command.
pub fn read_hum_message(raw: &str) -> Result<f32, CommandError> {
    read_command(raw, &HUM_KEYWORDS)
}

fn read_command(raw: &str, keywords: &[&str]) -> Result<f32, CommandError> {
    let (key, value) = raw.trim().split_once(':').ok_or(CommandError::WrongShape)?;

    let key = key.trim();
    if !keywords.iter().any(|k| key.eq_ignore_ascii_case(k)) {
        return Err(CommandError::WrongShape);
    }

    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidNumber)?;
    // `str::parse::<f32>` accepts "inf" and "NaN" spellings; neither is
    // a usable sensor target.
    if !value.is_finite() {
        return Err(CommandError::InvalidNumber);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_value_verbatim() {
        assert_eq!(read_temp_message("temp:21.5"), Ok(21.5));
        assert_eq!(read_hum_message("hum:40"), Ok(40.0));
    }

    #[test]
    fn sign_and_fraction_are_preserved() {
        assert_eq!(read_temp_message("temp:-5.2"), Ok(-5.2));
        assert_eq!(read_hum_message("hum:0.05"), Ok(0.05));
    }

    #[test]
    fn whitespace_and_case_are_tolerated() {
        assert_eq!(read_temp_message("  Temp : 21.5  "), Ok(21.5));
        assert_eq!(read_hum_message("HUMIDITY:55.5"), Ok(55.5));
        assert_eq!(read_temp_message("temperature: -3"), Ok(-3.0));
    }

    #[test]
    fn garbage_fails_with_wrong_shape() {
        assert_eq!(read_temp_message("banana"), Err(CommandError::WrongShape));
        assert_eq!(read_temp_message(""), Err(CommandError::WrongShape));
        assert_eq!(
            read_temp_message("setpoint:21.5"),
            Err(CommandError::WrongShape)
        );
    }

    #[test]
    fn wrong_keyword_for_the_message_type_fails() {
        // A humidity command fed to the temperature reader is a shape
        // mismatch, letting the transport route by type if it wants to.
        assert_eq!(read_temp_message("hum:40"), Err(CommandError::WrongShape));
        assert_eq!(read_hum_message("temp:21.5"), Err(CommandError::WrongShape));
    }

    #[test]
    fn non_numeric_payload_fails_with_invalid_number() {
        assert_eq!(
            read_temp_message("temp:warm"),
            Err(CommandError::InvalidNumber)
        );
        assert_eq!(read_temp_message("temp:"), Err(CommandError::InvalidNumber));
        assert_eq!(
            read_hum_message("hum:4 0"),
            Err(CommandError::InvalidNumber)
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(
            read_temp_message("temp:inf"),
            Err(CommandError::InvalidNumber)
        );
        assert_eq!(
            read_temp_message("temp:NaN"),
            Err(CommandError::InvalidNumber)
        );
    }
}
