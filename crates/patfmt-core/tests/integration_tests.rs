use chrono::{NaiveDateTime, TimeZone, Utc};
use patfmt_core::error::CoreError;
use patfmt_core::formatter::Formatter;
use patfmt_core::locale::{ChronoLocale, LocaleText, NameSpec};
use patfmt_core::renderer::Renderer;
use patfmt_core::timezone::{self, FixedZone, ZoneHandle};
use std::cell::Cell;
use std::sync::Arc;
use std::thread;

/// Helper to build an instant in microseconds from UTC fields
fn utc_micros(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .timestamp_micros()
}

/// Locale that counts how often it is asked for a name
struct CountingLocale {
    calls: Cell<usize>,
}

impl LocaleText for CountingLocale {
    fn render(&self, value: &NaiveDateTime, spec: NameSpec) -> String {
        self.calls.set(self.calls.get() + 1);
        ChronoLocale::default().render(value, spec)
    }
}

#[test]
fn test_log_layout_style_pattern() {
    let zone = timezone::resolve("Europe/Berlin").unwrap();
    let formatter = Formatter::new("yyyy-MM-dd HH:mm:ss,SSS z", zone);

    // 2024-10-27T00:30:00.007Z is 02:30 CEST, right before the fall-back transition
    let instant = utc_micros(2024, 10, 27, 0, 30, 0) + 7_000;
    assert_eq!(
        formatter.format_to_string(instant),
        "2024-10-27 02:30:00,007 Europe/Berlin"
    );

    // One hour later the wall clock repeats 02:30 in CET
    let later = instant + 3_600_000_000;
    assert_eq!(
        formatter.format_to_string(later),
        "2024-10-27 02:30:00,007 Europe/Berlin"
    );
}

#[test]
fn test_name_tables_are_built_once() {
    let locale = CountingLocale { calls: Cell::new(0) };
    let formatter = Formatter::with_locale("EEE EEEE MMM MMMM a", &locale, timezone::utc());

    // 7 + 7 + 12 + 12 + 2 entries, rendered at construction
    assert_eq!(locale.calls.get(), 40);

    let instant = utc_micros(2024, 3, 7, 13, 5, 9);
    for _ in 0..100 {
        assert_eq!(
            formatter.format_to_string(instant),
            "Thu Thursday Mar March PM"
        );
    }
    assert_eq!(locale.calls.get(), 40);
}

#[test]
fn test_localized_names() {
    let french: ChronoLocale = "fr_FR".parse().unwrap();
    let formatter = Formatter::with_locale("EEEE d MMMM yyyy", &french, timezone::utc());
    assert_eq!(
        formatter.format_to_string(utc_micros(2024, 3, 7, 0, 0, 0)),
        "jeudi 7 mars 2024"
    );
}

#[test]
fn test_renderer_order_matches_pattern() {
    let formatter = Formatter::new("dd/MM HH", timezone::utc());
    let kinds: Vec<String> = formatter.renderers().iter().map(Renderer::describe).collect();
    assert_eq!(
        kinds,
        vec![
            "day in month, width 2",
            "literal \"/\"",
            "month, width 2",
            "literal \" \"",
            "hour (0-23), width 2",
        ]
    );
}

#[test]
fn test_year_repeat_count_never_shortens() {
    let instant = utc_micros(2024, 3, 7, 0, 0, 0);
    for pattern in ["y", "yy", "yyy", "yyyy"] {
        let formatter = Formatter::new(pattern, timezone::utc());
        assert_eq!(formatter.format_to_string(instant), "2024", "pattern {}", pattern);
    }
    let formatter = Formatter::new("yyyyy", timezone::utc());
    assert_eq!(formatter.format_to_string(instant), "02024");
}

#[test]
fn test_concurrent_formatting() {
    let zone: ZoneHandle = Arc::new(FixedZone::new(9 * 3600).unwrap());
    let formatter = Arc::new(Formatter::new("yyyy-MM-dd'T'HH:mm:ssZ", zone));
    let instant = utc_micros(2024, 12, 31, 20, 0, 0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                (0..50)
                    .map(|_| formatter.format_to_string(instant))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for text in handle.join().unwrap() {
            assert_eq!(text, "2025-01-01'T'05:00:00+0900");
        }
    }
}

#[test]
fn test_unresolvable_zone_is_an_error() {
    assert_eq!(
        timezone::resolve("Nowhere/Special").unwrap_err(),
        CoreError::InvalidTimezone("Nowhere/Special".to_string())
    );
}
