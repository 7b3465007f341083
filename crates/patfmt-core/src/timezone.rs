use crate::error::CoreError;
use crate::exploded::ExplodedTime;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Shared, read-only handle to a time zone service.
pub type ZoneHandle = Arc<dyn TimeZoneService>;

/// Converts absolute instants into calendar fields for one zone.
///
/// Instants are microseconds since the Unix epoch.
pub trait TimeZoneService: Send + Sync + fmt::Debug {
    /// Breaks `micros` down into an [`ExplodedTime`] in this zone.
    fn explode(&self, micros: i64) -> Result<ExplodedTime, CoreError>;

    /// Symbolic identifier of the zone, e.g. `America/New_York` or `GMT-05:00`.
    fn identifier(&self) -> &str;
}

fn instant_from_micros(micros: i64) -> Result<DateTime<Utc>, CoreError> {
    DateTime::from_timestamp_micros(micros).ok_or(CoreError::InstantOutOfRange(micros))
}

/// A named zone from the IANA database, with DST-aware offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IanaZone {
    tz: Tz,
}

impl IanaZone {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl FromStr for IanaZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Self::new)
            .map_err(|_| CoreError::InvalidTimezone(s.to_string()))
    }
}

impl TimeZoneService for IanaZone {
    fn explode(&self, micros: i64) -> Result<ExplodedTime, CoreError> {
        let utc = instant_from_micros(micros)?;
        Ok(ExplodedTime::from_datetime(&utc.with_timezone(&self.tz)))
    }

    fn identifier(&self) -> &str {
        self.tz.name()
    }
}

/// A zone with a constant UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedZone {
    offset: FixedOffset,
    id: String,
}

impl FixedZone {
    /// Creates a zone `offset_secs` east of UTC, identified as `GMT+hh:mm`.
    pub fn new(offset_secs: i32) -> Result<Self, CoreError> {
        let offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| {
            CoreError::InvalidTimezone(format!("offset of {} seconds", offset_secs))
        })?;
        Ok(Self {
            offset,
            id: gmt_identifier(offset_secs),
        })
    }

    /// Creates a fixed zone with an explicit identifier.
    pub fn with_identifier(offset_secs: i32, id: impl Into<String>) -> Result<Self, CoreError> {
        let mut zone = Self::new(offset_secs)?;
        zone.id = id.into();
        Ok(zone)
    }

    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
            id: "UTC".to_string(),
        }
    }
}

impl TimeZoneService for FixedZone {
    fn explode(&self, micros: i64) -> Result<ExplodedTime, CoreError> {
        let utc = instant_from_micros(micros)?;
        Ok(ExplodedTime::from_datetime(&utc.with_timezone(&self.offset)))
    }

    fn identifier(&self) -> &str {
        &self.id
    }
}

fn gmt_identifier(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    format!("GMT{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Parses the offset part of a custom id such as `+5`, `-0530` or `+05:30`.
fn parse_custom_offset(text: &str) -> Option<i32> {
    let mut chars = text.chars();
    let sign = match chars.next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let body = chars.as_str();

    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None if body.len() <= 2 => (body, "0"),
        None if body.len() == 4 => body.split_at(2),
        None => return None,
    };
    if hours.is_empty()
        || hours.len() > 2
        || !hours.chars().all(|c| c.is_ascii_digit())
        || !minutes.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

/// Resolves a zone identifier into a shared zone handle.
///
/// Accepts `UTC`/`GMT`, custom offsets like `GMT-05:00` or `UTC+0530`, and
/// any IANA name known to `chrono-tz`.
pub fn resolve(id: &str) -> Result<ZoneHandle, CoreError> {
    let id = id.trim();
    if matches!(id, "UTC" | "GMT" | "Z") {
        return Ok(Arc::new(FixedZone::with_identifier(0, id)?));
    }

    if let Some(rest) = id.strip_prefix("GMT").or_else(|| id.strip_prefix("UTC")) {
        return match parse_custom_offset(rest) {
            Some(offset) => Ok(Arc::new(FixedZone::new(offset)?)),
            None => Err(CoreError::InvalidTimezone(id.to_string())),
        };
    }

    let zone: IanaZone = id.parse()?;
    Ok(Arc::new(zone))
}

/// Shared handle to the UTC zone.
pub fn utc() -> ZoneHandle {
    Arc::new(FixedZone::utc())
}

/// Validate a zone identifier without keeping the handle
pub fn validate_timezone(id: &str) -> Result<(), CoreError> {
    resolve(id).map(|_| ())
}
