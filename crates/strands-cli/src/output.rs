//! Text and JSON output.

use std::io::Write;

use console::Style;
use serde::Serialize;
use strands_page::StepOutcome;
use strands_theme::{toggle_label, PreferenceSource, Theme, ThemeEffect, ThemeState};

/// What `theme show` and `theme toggle` report.
#[derive(Debug, Serialize)]
pub struct ThemeReport {
    pub active: Theme,
    pub stored: Option<Theme>,
    pub system: Theme,
    pub source: PreferenceSource,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
}

impl ThemeReport {
    pub fn new(state: &ThemeState, effects: &[ThemeEffect]) -> Self {
        Self {
            active: state.active(),
            stored: state.stored(),
            system: state.system(),
            source: state.source(),
            label: toggle_label(state.active()),
            notifications: notifications(effects),
        }
    }
}

/// The notification texts among `effects`.
pub fn notifications(effects: &[ThemeEffect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            ThemeEffect::Notify(message) => Some(message.clone()),
            _ => None,
        })
        .collect()
}

struct Palette {
    key: Style,
    muted: Style,
    dark: Style,
    light: Style,
}

impl Palette {
    fn new() -> Self {
        Self {
            key: Style::new().bold(),
            muted: Style::new().dim(),
            dark: Style::new().white().on_black().bold(),
            light: Style::new().black().on_white().bold(),
        }
    }

    fn theme(&self, theme: Theme) -> String {
        let style = if theme.is_dark() { &self.dark } else { &self.light };
        style.apply_to(format!(" {} ", theme)).to_string()
    }
}

/// Writes text or JSON depending on the `--json` flag.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    json: bool,
    palette: Palette,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, json: bool) -> Self {
        Self {
            out,
            json,
            palette: Palette::new(),
        }
    }

    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.out, "{}", json)
    }

    pub fn report(&mut self, report: &ThemeReport) -> std::io::Result<()> {
        if self.json {
            return self.json(report);
        }
        let (out, p) = (&mut *self.out, &self.palette);
        for message in &report.notifications {
            writeln!(out, "{}", message)?;
        }
        let stored = match report.stored {
            Some(theme) => theme.to_string(),
            None => "none".to_string(),
        };
        let source = match report.source {
            PreferenceSource::Stored => "stored",
            PreferenceSource::System => "system",
        };
        writeln!(out, "{}  {}", p.key.apply_to("theme: "), p.theme(report.active))?;
        writeln!(out, "{}  {}", p.key.apply_to("source:"), source)?;
        writeln!(
            out,
            "{}  {} {}",
            p.key.apply_to("stored:"),
            stored,
            p.muted.apply_to(format!("(system: {})", report.system))
        )?;
        writeln!(out, "{}  {}", p.key.apply_to("label: "), report.label)
    }

    /// One line per system change seen by `theme watch`.
    pub fn system_change(&mut self, system: Theme, effects: &[ThemeEffect]) -> std::io::Result<()> {
        let messages = notifications(effects);
        if self.json {
            #[derive(Serialize)]
            struct Change<'m> {
                system: Theme,
                applied: bool,
                notifications: &'m [String],
            }
            let change = Change {
                system,
                applied: !effects.is_empty(),
                notifications: &messages,
            };
            let json = serde_json::to_string(&change).map_err(std::io::Error::other)?;
            return writeln!(self.out, "{}", json);
        }
        if messages.is_empty() {
            return writeln!(
                self.out,
                "{}",
                self.palette.muted.apply_to(format!(
                    "System theme changed to {}, keeping explicit preference",
                    system
                ))
            );
        }
        for message in messages {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    pub fn outcomes(&mut self, outcomes: &[StepOutcome]) -> std::io::Result<()> {
        if self.json {
            return self.json(outcomes);
        }
        let (out, p) = (&mut *self.out, &self.palette);
        for outcome in outcomes {
            writeln!(out, "{}", p.key.apply_to(&outcome.step))?;
            if outcome.effects.is_empty() {
                writeln!(out, "  {}", p.muted.apply_to("(no effects)"))?;
            }
            for effect in &outcome.effects {
                writeln!(out, "  {}", effect)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strands_theme::ThemeResolver;

    #[test]
    fn test_report_text() {
        let (resolver, effects) = ThemeResolver::initialize(None, Theme::Dark);
        let report = ThemeReport::new(resolver.state(), &effects);

        let mut buf = Vec::new();
        Printer::new(&mut buf, false).report(&report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("dark"));
        assert!(text.contains("system"));
        assert!(text.contains("Switch to light theme"));
    }

    #[test]
    fn test_report_json() {
        let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Dark);
        let effects = resolver.toggle();
        let report = ThemeReport::new(resolver.state(), &effects);

        let mut buf = Vec::new();
        Printer::new(&mut buf, true).report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["active"], "light");
        assert_eq!(value["stored"], "light");
        assert_eq!(value["source"], "stored");
        assert_eq!(value["notifications"][0], "Switched to light theme");
    }

    #[test]
    fn test_ignored_system_change_text() {
        let mut buf = Vec::new();
        Printer::new(&mut buf, false)
            .system_change(Theme::Dark, &[])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("keeping explicit preference"));
    }
}
