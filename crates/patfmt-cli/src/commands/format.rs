use anyhow::{bail, Context, Result};
use patfmt_core::formatter::Formatter;
use patfmt_core::locale::ChronoLocale;

use crate::cli::FormatCommand;
use crate::config::Config;
use crate::parser::parse_instant;
use crate::timezone::resolve_user_timezone;

/// Renders the requested instant and returns the text.
pub fn render(command: &FormatCommand, config: &Config) -> Result<String> {
    let pattern = command.pattern.as_deref().unwrap_or(&config.pattern);
    let timezone = command.timezone.as_deref().unwrap_or(&config.timezone);
    let locale_name = command.locale.as_deref().unwrap_or(&config.locale);

    let zone = resolve_user_timezone(timezone)
        .with_context(|| format!("Failed to resolve time zone '{}'", timezone))?;
    let locale: ChronoLocale = locale_name
        .parse()
        .with_context(|| format!("Failed to load locale '{}'", locale_name))?;
    let instant = parse_instant(command.at.as_deref())?;

    let formatter = Formatter::with_locale(pattern, &locale, zone);
    let text = formatter.format_to_string(instant);

    // The formatter stays silent when the zone cannot represent the instant
    if text.is_empty() && !formatter.is_empty() {
        bail!(
            "Instant {} cannot be represented in time zone '{}'",
            instant,
            formatter.time_zone().identifier()
        );
    }
    Ok(text)
}

pub fn format_instant(command: FormatCommand, config: &Config) -> Result<()> {
    let text = render(&command, config)?;
    println!("{}", text);
    Ok(())
}
