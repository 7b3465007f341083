use anyhow::{Context, Result};
use patfmt_core::locale::ChronoLocale;
use patfmt_core::pattern::parse_pattern;
use patfmt_core::renderer::Renderer;

use crate::cli::ExplainCommand;
use crate::config::Config;
use crate::views::table::{display_directives, ViewDirective};

/// Pairs every run of the pattern with the renderer it compiles to.
pub fn explain(pattern: &str, locale: &ChronoLocale) -> Vec<ViewDirective> {
    parse_pattern(pattern)
        .into_iter()
        .map(|directive| {
            let renderer = Renderer::from_directive(directive, locale);
            ViewDirective {
                source: directive.source(),
                letter: directive.letter,
                repeat: directive.repeat,
                renderer: renderer.describe(),
                is_literal: matches!(renderer, Renderer::Literal { .. }),
            }
        })
        .collect()
}

pub fn explain_pattern(command: ExplainCommand, config: &Config) -> Result<()> {
    let pattern = command.pattern.as_deref().unwrap_or(&config.pattern);
    let locale_name = command.locale.as_deref().unwrap_or(&config.locale);
    let locale: ChronoLocale = locale_name
        .parse()
        .with_context(|| format!("Failed to load locale '{}'", locale_name))?;

    println!("Pattern {:?} with locale {}", pattern, locale);
    display_directives(&explain(pattern, &locale));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_marks_literals() {
        let rows = explain("hh 'o''clock' a", &ChronoLocale::default());
        let summary: Vec<(String, bool)> = rows
            .iter()
            .map(|row| (row.source.clone(), row.is_literal))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("hh".to_string(), false),
                (" ".to_string(), true),
                ("'".to_string(), true),
                ("o".to_string(), true),
                ("''".to_string(), true),
                ("c".to_string(), true),
                ("l".to_string(), true),
                ("o".to_string(), true),
                ("c".to_string(), true),
                ("k".to_string(), false),
                ("'".to_string(), true),
                (" ".to_string(), true),
                ("a".to_string(), false),
            ]
        );
        assert_eq!(rows[9].renderer, "hour (1-24), width 1");
    }

    #[test]
    fn test_explain_empty_pattern() {
        assert!(explain("", &ChronoLocale::default()).is_empty());
    }
}
