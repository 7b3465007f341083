use anyhow::{Context, Result};
use chrono::Utc;
use patfmt_core::formatter::Formatter;
use patfmt_core::locale::ChronoLocale;
use patfmt_core::timezone::resolve;

use crate::cli::ZonesCommand;
use crate::config::Config;
use crate::timezone::get_common_timezones;
use crate::views::table::{display_zones, ViewZone};

/// Common zones matching `filter`, rendered at `micros`.
pub fn collect_zones(
    filter: Option<&str>,
    pattern: &str,
    locale: &ChronoLocale,
    micros: i64,
) -> Result<Vec<ViewZone>> {
    let filter = filter.map(str::to_lowercase);
    let mut zones = Vec::new();

    for name in get_common_timezones() {
        if let Some(filter) = &filter {
            if !name.to_lowercase().contains(filter) {
                continue;
            }
        }
        let zone = resolve(name)?;
        let offset = Formatter::new("Z", zone.clone()).format_to_string(micros);
        let local_time = Formatter::with_locale(pattern, locale, zone).format_to_string(micros);
        zones.push(ViewZone {
            name: name.to_string(),
            offset,
            local_time,
        });
    }
    Ok(zones)
}

pub fn list_zones(command: ZonesCommand, config: &Config) -> Result<()> {
    let locale: ChronoLocale = config
        .locale
        .parse()
        .with_context(|| format!("Failed to load locale '{}'", config.locale))?;
    let now = Utc::now().timestamp_micros();
    let zones = collect_zones(command.filter.as_deref(), &config.pattern, &locale, now)?;
    display_zones(&zones);
    Ok(())
}
