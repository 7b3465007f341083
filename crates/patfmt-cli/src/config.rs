use figment::{
    providers::{Data, Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;

use crate::timezone::detect_system_timezone;

pub const DEFAULT_CONFIG_FILE: &str = "patfmt.toml";
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Pattern used when a command is given none
    pub pattern: String,
    /// Time zone identifier (IANA name or `GMT+hh:mm`)
    pub timezone: String,
    /// Locale for month, day and AM/PM names
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            timezone: detect_system_timezone(),
            locale: "en_US".to_string(),
        }
    }
}

impl Config {
    /// Loads `patfmt.toml` from the working directory, overlaid with
    /// `PATFMT_*` environment variables.
    /// A missing file is not an error here, malformed contents are.
    pub fn new() -> Result<Self, figment::Error> {
        Self::load(Toml::file(DEFAULT_CONFIG_FILE))
    }

    /// Loads an explicitly named file, which must exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Self::load(Toml::file_exact(path.as_ref()))
    }

    fn load(file: Data<Toml>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(file)
            .merge(Env::prefixed("PATFMT_"))
            .extract()
    }
}
