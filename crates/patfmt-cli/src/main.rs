use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use patfmt_core::error::CoreError;

mod cli;
mod commands;
mod config;
mod parser;
mod timezone;
mod views;

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli) {
        handle_error(e);
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::Config::from_file(path).with_context(|| {
            format!("Failed to load configuration from '{}'", path.display())
        })?,
        None => config::Config::new().with_context(|| {
            format!("Failed to load configuration from '{}'", config::DEFAULT_CONFIG_FILE)
        })?,
    };
    log::debug!("effective configuration: {:?}", config);

    match cli.command {
        cli::Commands::Format(command) => commands::format::format_instant(command, &config),
        cli::Commands::Explain(command) => commands::explain::explain_pattern(command, &config),
        cli::Commands::Zones(command) => commands::zones::list_zones(command, &config),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();
    let core_error = err.chain().find_map(|e| e.downcast_ref::<CoreError>());

    match core_error {
        Some(CoreError::InvalidTimezone(s)) => {
            eprintln!("{} Invalid timezone: {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::InvalidLocale(s)) => {
            eprintln!(
                "{} Unknown locale '{}'. Use names like 'en_US' or 'fr_FR'",
                "Error:".style(error_style),
                s.yellow()
            );
        }
        Some(CoreError::InvalidInstant(s)) => {
            eprintln!(
                "{} Invalid instant {}. Use RFC 3339 or @<microseconds>",
                "Error:".style(error_style),
                s
            );
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
