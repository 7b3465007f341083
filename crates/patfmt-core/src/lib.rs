//! # Patfmt Core Library
//!
//! A pattern-driven date/time formatting engine: a pattern such as
//! `yyyy-MM-dd HH:mm:ss Z` is compiled once into an ordered list of field
//! renderers, then any number of instants are rendered through it in a given
//! time zone and locale.
//!
//! ## Features
//!
//! - **Compiled Patterns**: Patterns are lexed into runs of identical
//!   characters; each run's letter and repeat count pick a renderer
//! - **Locale Names**: Month, weekday and AM/PM names are rendered once per
//!   formatter from chrono's locale data and cached
//! - **Timezone Awareness**: IANA zones via `chrono-tz`, plus fixed `GMT+hh:mm`
//!   offsets
//! - **Infallible Formatting**: Unknown letters are literals, and an instant
//!   the zone cannot represent simply produces no output
//!
//! ## Core Modules
//!
//! - [`pattern`]: Pattern lexing into directive runs
//! - [`renderer`]: The renderer family and the directive-to-renderer mapping
//! - [`formatter`]: Compiled patterns bound to a time zone
//! - [`timezone`]: Time zone services and identifier resolution
//! - [`locale`]: Locale name tables
//! - [`exploded`]: Calendar field snapshots
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use patfmt_core::{formatter::Formatter, timezone};
//!
//! # fn main() -> Result<(), patfmt_core::error::CoreError> {
//! let zone = timezone::resolve("GMT-05:00")?;
//! let formatter = Formatter::new("yyyy-MM-dd hh:mm a ZZZZ", zone);
//!
//! // 2024-03-07T18:30:00Z
//! let text = formatter.format_to_string(1_709_836_200_000_000);
//! assert_eq!(text, "2024-03-07 01:30 PM -0500");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod exploded;
pub mod formatter;
pub mod locale;
pub mod pattern;
pub mod renderer;
pub mod timezone;

pub use error::CoreError;
pub use formatter::Formatter;
