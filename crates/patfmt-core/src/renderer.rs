use std::fmt::{self, Write};
use std::sync::Arc;

use crate::exploded::ExplodedTime;
use crate::locale::{LocaleText, NameSpec, NameTable};
use crate::pattern::Directive;
use crate::timezone::ZoneHandle;

/// Calendar fields rendered as zero-padded decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    Month,
    WeekInYear,
    WeekInMonth,
    DayInMonth,
    DayInYear,
    /// Not implemented; always -1.
    DayOfWeekInMonth,
    /// 24-hour clock, `0-23` with offset 0 or `1-24` with offset 1
    MilitaryHour { offset: u32 },
    /// 12-hour clock, `0-11` with offset 0 or `1-12` with offset 1
    Hour { offset: u32 },
    Minute,
    Second,
    Millisecond,
}

impl NumericField {
    /// Extracts this field's value from an exploded time.
    pub fn value(self, time: &ExplodedTime) -> i64 {
        match self {
            NumericField::Year => 1900 + i64::from(time.year),
            NumericField::Month => i64::from(time.month) + 1,
            NumericField::WeekInYear => i64::from(time.day_of_year / 7),
            NumericField::WeekInMonth => i64::from(time.day_of_month / 7),
            NumericField::DayInMonth => i64::from(time.day_of_month),
            NumericField::DayInYear => i64::from(time.day_of_year),
            NumericField::DayOfWeekInMonth => -1,
            NumericField::MilitaryHour { offset } => i64::from(time.hour + offset),
            NumericField::Hour { offset } => i64::from((time.hour + 12 - offset) % 12 + offset),
            NumericField::Minute => i64::from(time.minute),
            NumericField::Second => i64::from(time.second),
            NumericField::Millisecond => i64::from(time.micros / 1000),
        }
    }

    fn label(self) -> &'static str {
        match self {
            NumericField::Year => "year",
            NumericField::Month => "month",
            NumericField::WeekInYear => "week in year",
            NumericField::WeekInMonth => "week in month",
            NumericField::DayInMonth => "day in month",
            NumericField::DayInYear => "day in year",
            NumericField::DayOfWeekInMonth => "day of week in month (unimplemented, -1)",
            NumericField::MilitaryHour { offset: 0 } => "hour (0-23)",
            NumericField::MilitaryHour { .. } => "hour (1-24)",
            NumericField::Hour { offset: 0 } => "hour (0-11)",
            NumericField::Hour { .. } => "hour (1-12)",
            NumericField::Minute => "minute",
            NumericField::Second => "second",
            NumericField::Millisecond => "millisecond",
        }
    }
}

/// One compiled step of a pattern.
///
/// Each variant appends its piece of output for an exploded time. Name tables
/// are filled when the renderer is built, so rendering never touches the
/// locale.
#[derive(Debug, Clone)]
pub enum Renderer {
    /// A character repeated `count` times
    Literal { ch: char, count: usize },
    /// Always "AD"
    Era,
    /// A numeric field left-padded with '0' to `width`; never truncated
    Numeric { field: NumericField, width: usize },
    /// A month, weekday or AM/PM name looked up in a prebuilt table
    Name(NameTable),
    /// The bound zone's identifier
    GeneralTimeZone { zone: Option<ZoneHandle> },
    /// `Z`, or a signed `hhmm` UTC offset
    Rfc822TimeZone,
}

impl Renderer {
    /// Builds the renderer for one pattern run.
    ///
    /// Characters outside the directive alphabet become literals. Named
    /// variants render their whole table through `locale` here.
    pub fn from_directive(directive: Directive, locale: &dyn LocaleText) -> Self {
        let Directive { letter, repeat } = directive;
        let numeric = |field| Renderer::Numeric { field, width: repeat };

        let renderer = match letter {
            'G' => Renderer::Era,
            'y' => numeric(NumericField::Year),
            'M' if repeat <= 2 => numeric(NumericField::Month),
            'M' if repeat == 3 => Renderer::Name(NameTable::build(NameSpec::AbbreviatedMonth, locale)),
            'M' => Renderer::Name(NameTable::build(NameSpec::FullMonth, locale)),
            'w' => numeric(NumericField::WeekInYear),
            'W' => numeric(NumericField::WeekInMonth),
            'D' => numeric(NumericField::DayInYear),
            'd' => numeric(NumericField::DayInMonth),
            'F' => numeric(NumericField::DayOfWeekInMonth),
            'E' if repeat <= 3 => Renderer::Name(NameTable::build(NameSpec::AbbreviatedWeekday, locale)),
            'E' => Renderer::Name(NameTable::build(NameSpec::FullWeekday, locale)),
            'a' => Renderer::Name(NameTable::build(NameSpec::AmPm, locale)),
            'H' => numeric(NumericField::MilitaryHour { offset: 0 }),
            'k' => numeric(NumericField::MilitaryHour { offset: 1 }),
            'K' => numeric(NumericField::Hour { offset: 0 }),
            'h' => numeric(NumericField::Hour { offset: 1 }),
            'm' => numeric(NumericField::Minute),
            's' => numeric(NumericField::Second),
            'S' => numeric(NumericField::Millisecond),
            'z' => Renderer::GeneralTimeZone { zone: None },
            'Z' => Renderer::Rfc822TimeZone,
            ch => Renderer::Literal { ch, count: repeat },
        };
        log::trace!("{:?} -> {}", directive, renderer.describe());
        renderer
    }

    /// Appends this renderer's output for `time`.
    pub fn render<W: Write>(&self, out: &mut W, time: &ExplodedTime) -> fmt::Result {
        match self {
            Renderer::Literal { ch, count } => {
                for _ in 0..*count {
                    out.write_char(*ch)?;
                }
                Ok(())
            }
            Renderer::Era => out.write_str("AD"),
            Renderer::Numeric { field, width } => {
                write!(out, "{:0>width$}", field.value(time), width = *width)
            }
            Renderer::Name(table) => {
                let index = match table.spec() {
                    NameSpec::AbbreviatedMonth | NameSpec::FullMonth => time.month,
                    NameSpec::AbbreviatedWeekday | NameSpec::FullWeekday => time.weekday,
                    NameSpec::AmPm => time.hour / 12,
                };
                match table.get(index as usize) {
                    Some(name) => out.write_str(name),
                    None => Ok(()),
                }
            }
            Renderer::GeneralTimeZone { zone } => match zone {
                Some(zone) => out.write_str(zone.identifier()),
                None => Ok(()),
            },
            Renderer::Rfc822TimeZone => {
                if time.utc_offset == 0 {
                    return out.write_char('Z');
                }
                let sign = if time.utc_offset > 0 { '+' } else { '-' };
                let offset = time.utc_offset.unsigned_abs();
                write!(out, "{}{:02}{:02}", sign, offset / 3600, (offset % 3600) / 60)
            }
        }
    }

    /// Whether this renderer reads the bound time zone.
    pub fn is_zone_aware(&self) -> bool {
        matches!(self, Renderer::GeneralTimeZone { .. })
    }

    /// Points a zone-aware renderer at `zone`; other renderers ignore it.
    pub fn bind(&mut self, zone: &ZoneHandle) {
        if let Renderer::GeneralTimeZone { zone: bound } = self {
            *bound = Some(Arc::clone(zone));
        }
    }

    /// Human-readable description, used by `patfmt explain`.
    pub fn describe(&self) -> String {
        match self {
            Renderer::Literal { ch, count } => {
                format!("literal {:?}", std::iter::repeat(*ch).take(*count).collect::<String>())
            }
            Renderer::Era => "era (AD)".to_string(),
            Renderer::Numeric { field, width } => format!("{}, width {}", field.label(), width),
            Renderer::Name(table) => match table.spec() {
                NameSpec::AbbreviatedMonth => "abbreviated month name",
                NameSpec::FullMonth => "full month name",
                NameSpec::AbbreviatedWeekday => "abbreviated day name",
                NameSpec::FullWeekday => "full day name",
                NameSpec::AmPm => "AM/PM marker",
            }
            .to_string(),
            Renderer::GeneralTimeZone { .. } => "time zone identifier".to_string(),
            Renderer::Rfc822TimeZone => "RFC 822 time zone offset".to_string(),
        }
    }
}
