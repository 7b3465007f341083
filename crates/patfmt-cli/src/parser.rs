use chrono::{DateTime, Utc};
use patfmt_core::error::CoreError;

/// Parses an instant given on the command line into microseconds since the
/// Unix epoch.
///
/// Accepts RFC 3339 (`2024-03-07T13:05:09Z`, `2024-03-07T08:05:09-05:00`) or a
/// raw count prefixed with `@` (`@1709816709000000`). `None` means now.
pub fn parse_instant(input: Option<&str>) -> Result<i64, CoreError> {
    let Some(text) = input.map(str::trim) else {
        return Ok(Utc::now().timestamp_micros());
    };

    if let Some(raw) = text.strip_prefix('@') {
        return raw
            .parse::<i64>()
            .map_err(|e| CoreError::InvalidInstant(format!("'{}': {}", text, e)));
    }

    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.timestamp_micros())
        .map_err(|e| CoreError::InvalidInstant(format!("'{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-07T00:00:00Z", 1_709_769_600_000_000)]
    #[case("2024-03-07T00:00:00.5Z", 1_709_769_600_500_000)]
    #[case("2024-03-06T19:00:00-05:00", 1_709_769_600_000_000)]
    #[case("@1709769600000000", 1_709_769_600_000_000)]
    #[case("@-1", -1)]
    fn test_parse_instant(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_instant(Some(input)).unwrap(), expected);
    }

    #[rstest]
    #[case("yesterday")]
    #[case("@soon")]
    #[case("2024-13-01T00:00:00Z")]
    fn test_parse_instant_rejects(#[case] input: &str) {
        assert!(matches!(
            parse_instant(Some(input)),
            Err(CoreError::InvalidInstant(_))
        ));
    }

    #[test]
    fn test_default_is_now() {
        let before = Utc::now().timestamp_micros();
        let parsed = parse_instant(None).unwrap();
        assert!(parsed >= before);
    }
}
