use crate::error::CoreError;
use chrono::{Datelike, Duration, Locale, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Which locale name a synthetic calendar value should be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSpec {
    AbbreviatedMonth,
    FullMonth,
    AbbreviatedWeekday,
    FullWeekday,
    AmPm,
}

impl NameSpec {
    /// strftime conversion for this name
    pub fn strftime(self) -> &'static str {
        match self {
            NameSpec::AbbreviatedMonth => "%b",
            NameSpec::FullMonth => "%B",
            NameSpec::AbbreviatedWeekday => "%a",
            NameSpec::FullWeekday => "%A",
            NameSpec::AmPm => "%p",
        }
    }

    /// Number of entries in the name table for this spec.
    pub fn table_len(self) -> usize {
        match self {
            NameSpec::AbbreviatedMonth | NameSpec::FullMonth => 12,
            NameSpec::AbbreviatedWeekday | NameSpec::FullWeekday => 7,
            NameSpec::AmPm => 2,
        }
    }
}

/// Locale-specific text rendering of calendar names.
///
/// Only consulted while name tables are built, never while formatting.
pub trait LocaleText {
    /// Renders the field selected by `spec` out of `value`.
    fn render(&self, value: &NaiveDateTime, spec: NameSpec) -> String;
}

/// [`LocaleText`] backed by chrono's bundled locale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoLocale {
    locale: Locale,
}

impl ChronoLocale {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Default for ChronoLocale {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

impl FromStr for ChronoLocale {
    type Err = CoreError;

    /// Accepts POSIX-style names (`fr_FR`), with or without an encoding
    /// suffix (`fr_FR.UTF-8`), and the hyphenated BCP 47 spelling (`fr-FR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.split('.').next().unwrap_or(s).replace('-', "_");
        Locale::try_from(name.as_str())
            .map(Self::new)
            .map_err(|_| CoreError::InvalidLocale(s.to_string()))
    }
}

impl fmt::Display for ChronoLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.locale)
    }
}

impl LocaleText for ChronoLocale {
    fn render(&self, value: &NaiveDateTime, spec: NameSpec) -> String {
        value
            .and_utc()
            .format_localized(spec.strftime(), self.locale)
            .to_string()
    }
}

/// Cached locale names indexed by month, weekday or AM/PM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    spec: NameSpec,
    names: Vec<String>,
}

impl NameTable {
    /// Renders every entry for `spec` through `locale` once.
    pub fn build(spec: NameSpec, locale: &dyn LocaleText) -> Self {
        let names: Vec<String> = (0..spec.table_len())
            .map(|index| locale.render(&synthetic_value(spec, index), spec))
            .collect();
        log::trace!("built {:?} name table: {:?}", spec, names);
        Self { spec, names }
    }

    pub fn spec(&self) -> NameSpec {
        self.spec
    }

    /// Name at `index`, if the index is in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// 2006-01-01 fell on a Sunday, so month and weekday indexes both line up
/// with day offsets from it.
fn epoch_sunday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2006, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// A calendar value carrying only the field that `spec` names.
fn synthetic_value(spec: NameSpec, index: usize) -> NaiveDateTime {
    let base = epoch_sunday();
    match spec {
        NameSpec::AbbreviatedMonth | NameSpec::FullMonth => {
            base.with_month0(index as u32).unwrap_or(base)
        }
        NameSpec::AbbreviatedWeekday | NameSpec::FullWeekday => base + Duration::days(index as i64),
        NameSpec::AmPm => base + Duration::hours(12 * index as i64),
    }
}
