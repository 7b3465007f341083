use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::sync::Arc;

use crate::locale::{ChronoLocale, LocaleText};
use crate::pattern::parse_pattern;
use crate::renderer::Renderer;
use crate::timezone::ZoneHandle;

/// A compiled date pattern bound to a time zone.
///
/// The pattern is lexed and every renderer (including its locale name table)
/// is built once, in the constructor. Formatting only reads that state, so a
/// `Formatter` can be shared between threads; rebinding the zone needs
/// `&mut self` and cannot overlap a format call.
#[derive(Debug, Clone)]
pub struct Formatter {
    pattern: Vec<Renderer>,
    zone: ZoneHandle,
}

impl Formatter {
    /// Compiles `pattern` with the default locale.
    pub fn new(pattern: &str, zone: ZoneHandle) -> Self {
        Self::with_locale(pattern, &ChronoLocale::default(), zone)
    }

    /// Compiles `pattern`, building any name tables from `locale`.
    pub fn with_locale(pattern: &str, locale: &dyn LocaleText, zone: ZoneHandle) -> Self {
        let renderers = parse_pattern(pattern)
            .into_iter()
            .map(|directive| Renderer::from_directive(directive, locale))
            .collect();

        let mut formatter = Self {
            pattern: renderers,
            zone: Arc::clone(&zone),
        };
        formatter.bind(zone);
        log::debug!(
            "compiled pattern {:?} into {} renderers for zone {}",
            pattern,
            formatter.pattern.len(),
            formatter.zone.identifier()
        );
        formatter
    }

    /// Appends `micros` (microseconds since the Unix epoch) rendered in the
    /// bound zone.
    ///
    /// When the zone cannot explode the instant, `out` is left untouched.
    pub fn format(&self, out: &mut String, micros: i64) {
        // Writing into a String cannot fail
        let _ = self.write_to(out, micros);
    }

    /// Like [`Formatter::format`], for any [`std::fmt::Write`] sink.
    pub fn write_to<W: Write>(&self, out: &mut W, micros: i64) -> std::fmt::Result {
        let time = match self.zone.explode(micros) {
            Ok(time) => time,
            Err(e) => {
                log::debug!("skipping format of {}: {}", micros, e);
                return Ok(());
            }
        };
        for renderer in &self.pattern {
            renderer.render(out, &time)?;
        }
        Ok(())
    }

    /// Formats a chrono UTC value.
    pub fn format_datetime(&self, out: &mut String, instant: &DateTime<Utc>) {
        self.format(out, instant.timestamp_micros());
    }

    /// Formats `micros` into a fresh string.
    pub fn format_to_string(&self, micros: i64) -> String {
        let mut out = String::new();
        self.format(&mut out, micros);
        out
    }

    /// Replaces the time zone and hands it to every zone-aware renderer.
    pub fn bind(&mut self, zone: ZoneHandle) {
        for renderer in self.pattern.iter_mut().filter(|r| r.is_zone_aware()) {
            renderer.bind(&zone);
        }
        self.zone = zone;
    }

    pub fn time_zone(&self) -> &ZoneHandle {
        &self.zone
    }

    /// The compiled renderers, in output order.
    pub fn renderers(&self) -> &[Renderer] {
        &self.pattern
    }

    /// True when the pattern was empty and formatting appends nothing.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}
