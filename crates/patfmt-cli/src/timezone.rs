use patfmt_core::error::CoreError;
use patfmt_core::timezone::{resolve, validate_timezone, ZoneHandle};

/// Detect system timezone
pub fn detect_system_timezone() -> String {
    // Try multiple detection methods
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Use iana-time-zone crate
    if let Ok(tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    log::debug!("could not detect the system time zone, using UTC");
    "UTC".to_string()
}

/// Get common timezones for user selection
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "America/Sao_Paulo",
        "America/Toronto",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Europe/Madrid",
        "Europe/Moscow",
        "Africa/Cairo",
        "Africa/Johannesburg",
        "Asia/Dubai",
        "Asia/Kolkata",
        "Asia/Kathmandu",
        "Asia/Shanghai",
        "Asia/Tokyo",
        "Asia/Singapore",
        "Australia/Adelaide",
        "Australia/Sydney",
        "Pacific/Auckland",
        "Pacific/Honolulu",
    ]
}

/// Suggest similar timezone for invalid input
pub fn suggest_timezone(invalid: &str) -> Vec<&'static str> {
    let invalid_lower = invalid.to_lowercase();
    if invalid_lower.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<_> = get_common_timezones()
        .into_iter()
        .filter(|tz| {
            let tz_lower = tz.to_lowercase();
            tz_lower.contains(&invalid_lower)
                || invalid_lower.contains(&tz_lower)
                // Check city names
                || tz.split('/').any(|part| invalid_lower.contains(&part.to_lowercase()))
        })
        .collect();

    // Limit to top 5 suggestions
    matches.truncate(5);
    matches
}

/// Resolve user input into a zone, mapping common abbreviations first
pub fn resolve_user_timezone(input: &str) -> Result<ZoneHandle, CoreError> {
    let normalized = match input.to_lowercase().as_str() {
        "est" | "eastern" => "America/New_York",
        "cst" | "central" => "America/Chicago",
        "mst" | "mountain" => "America/Denver",
        "pst" | "pacific" => "America/Los_Angeles",
        "cet" | "paris" => "Europe/Paris",
        "jst" | "tokyo" => "Asia/Tokyo",
        _ => input,
    };

    resolve(normalized).map_err(|_| {
        let suggestions = suggest_timezone(input);
        if suggestions.is_empty() {
            CoreError::InvalidTimezone(format!(
                "'{}'. Use IANA names like 'America/New_York' or offsets like 'GMT-05:00'",
                input
            ))
        } else {
            CoreError::InvalidTimezone(format!(
                "'{}'. Did you mean: {}?",
                input,
                suggestions.join(", ")
            ))
        }
    })
}
