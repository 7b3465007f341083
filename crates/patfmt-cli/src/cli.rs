use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Format dates and times with letter patterns such as yyyy-MM-dd HH:mm:ss
#[derive(Parser, Debug)]
#[command(name = "patfmt", author, version, about, long_about = None)]
pub struct Cli {
    /// Alternate configuration file (defaults to ./patfmt.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Format an instant with a pattern
    Format(FormatCommand),
    /// Show how a pattern is split into directives
    Explain(ExplainCommand),
    /// List common time zones with their current offsets
    Zones(ZonesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct FormatCommand {
    /// The pattern, e.g. "yyyy-MM-dd HH:mm:ss Z" (defaults to the configured pattern)
    pub pattern: Option<String>,
    /// The instant to format
    #[clap(short, long, help = "RFC 3339 timestamp or @<microseconds since epoch> (default: now)")]
    pub at: Option<String>,
    /// Time zone to render in
    #[clap(short, long, help = "IANA name or custom offset (e.g. 'America/New_York', 'GMT-05:00')")]
    pub timezone: Option<String>,
    /// Locale for month, day and AM/PM names
    #[clap(short, long, help = "Locale name (e.g. 'en_US', 'fr_FR')")]
    pub locale: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExplainCommand {
    /// The pattern to explain (defaults to the configured pattern)
    pub pattern: Option<String>,
    /// Locale used to build name tables
    #[clap(short, long)]
    pub locale: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ZonesCommand {
    /// Only list zones whose name contains this text
    #[clap(short, long)]
    pub filter: Option<String>,
}
