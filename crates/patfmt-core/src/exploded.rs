use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// A calendar snapshot of one instant in one time zone.
///
/// Field conventions follow the broken-down `tm` layout: the year is an offset
/// from 1900, the month and day of year are 0-based, the weekday counts from
/// Sunday = 0 and the day of month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplodedTime {
    /// Years since 1900
    pub year: i32,
    /// Month index, 0-11
    pub month: u32,
    /// Day of month, 1-31
    pub day_of_month: u32,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-60
    pub second: u32,
    /// Microseconds past the second
    pub micros: u32,
    /// Day of week, Sunday = 0
    pub weekday: u32,
    /// Day of year, 0-365
    pub day_of_year: u32,
    /// Seconds east of UTC
    pub utc_offset: i32,
}

impl ExplodedTime {
    /// Breaks a zoned chrono value down into its calendar fields.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year() - 1900,
            month: dt.month0(),
            day_of_month: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            // Leap-second nanos roll past 1e9; keep the sub-second part only
            micros: (dt.nanosecond() % 1_000_000_000) / 1_000,
            weekday: dt.weekday().num_days_from_sunday(),
            day_of_year: dt.ordinal0(),
            utc_offset: dt.offset().fix().local_minus_utc(),
        }
    }
}
