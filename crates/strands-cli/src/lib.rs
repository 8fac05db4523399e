//! The `strands` command-line tool.
//!
//! Runs the theme resolver against a file-backed preference store and the
//! OS color scheme, and replays scripted page sessions.

mod args;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use strands_page::{Effect, Page, PageConfig, Script, StaticLayout};
use strands_theme::store::load_theme;
use strands_theme::{
    detect_system_theme, FileStore, PreferenceStore, SystemWatcher, Theme, ThemeSession,
};

pub use args::{Cli, Command, SimulateArgs, ThemeCommand, WatchArgs};
use output::{Printer, ThemeReport};

/// Runs a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let mut printer = Printer::new(out, cli.json);
    match &cli.command {
        Command::Theme(ThemeCommand::Show) => theme_show(cli, &mut printer),
        Command::Theme(ThemeCommand::Toggle) => theme_toggle(cli, &mut printer),
        Command::Theme(ThemeCommand::Watch(args)) => theme_watch(cli, args, &mut printer),
        Command::Simulate(args) => simulate(cli, args, &mut printer),
    }
}

fn store_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.store {
        Some(path) => Ok(path.clone()),
        None => FileStore::default_path().context("cannot locate the preference store"),
    }
}

fn open_store(cli: &Cli) -> Result<FileStore> {
    let path = store_path(cli)?;
    tracing::debug!(path = %path.display(), "using preference store");
    Ok(FileStore::new(path))
}

fn system_theme(cli: &Cli) -> Theme {
    cli.system.unwrap_or_else(detect_system_theme)
}

fn open_session(cli: &Cli, system: Theme) -> Result<ThemeSession<FileStore>> {
    let store = open_store(cli)?;
    let path = store.path().display().to_string();
    let (session, _) = ThemeSession::initialize(store, system)
        .with_context(|| format!("failed to read preferences from {}", path))?;
    Ok(session)
}

fn load_config(cli: &Cli) -> Result<PageConfig> {
    match &cli.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("failed to load page config {}", path.display())),
        None => Ok(PageConfig::default()),
    }
}

fn theme_show(cli: &Cli, printer: &mut Printer<'_>) -> Result<()> {
    let session = open_session(cli, system_theme(cli))?;
    printer.report(&ThemeReport::new(session.state(), &[]))?;
    Ok(())
}

fn theme_toggle(cli: &Cli, printer: &mut Printer<'_>) -> Result<()> {
    let mut session = open_session(cli, system_theme(cli))?;
    let effects = session
        .toggle()
        .with_context(|| format!("failed to save preference to {}", session.store().path().display()))?;
    printer.report(&ThemeReport::new(session.state(), &effects))?;
    Ok(())
}

fn theme_watch(cli: &Cli, args: &WatchArgs, printer: &mut Printer<'_>) -> Result<()> {
    // A forced scheme never changes, but still goes through the watcher.
    let mut watcher = match cli.system {
        Some(Theme::Dark) => SystemWatcher::with_detector(|| Theme::Dark),
        Some(Theme::Light) => SystemWatcher::with_detector(|| Theme::Light),
        None => SystemWatcher::new(),
    };
    // The session starts from the watcher's own first reading.
    let mut session = open_session(cli, watcher.current())?;

    let interval = Duration::from_millis(args.interval_ms);
    let mut polls = 0u64;
    tracing::debug!(interval_ms = args.interval_ms, max_polls = ?args.max_polls, "watching system theme");
    while args.max_polls.map_or(true, |max| polls < max) {
        thread::sleep(interval);
        polls += 1;
        if let Some(system) = watcher.poll() {
            let effects = session.on_system_preference_changed(system)?;
            printer.system_change(system, &effects)?;
        }
    }
    Ok(())
}

fn simulate(cli: &Cli, args: &SimulateArgs, printer: &mut Printer<'_>) -> Result<()> {
    let script = Script::from_steps(&args.steps).context("invalid simulation step")?;
    let config = load_config(cli)?;
    let mut store = open_store(cli)?;
    let stored = load_theme(&store)
        .with_context(|| format!("failed to read preferences from {}", store.path().display()))?;

    let layout = args
        .sections
        .iter()
        .fold(StaticLayout::new(), |layout, (id, offset)| {
            layout.with_section(id.clone(), *offset)
        });
    let mut page = Page::with_layout(config, stored, system_theme(cli), layout)
        .at_location(args.location.clone());

    let outcomes = script.run(&mut page);
    for effect in outcomes.iter().flat_map(|o| &o.effects) {
        if let Effect::Persist { key, value } = effect {
            store
                .set(key, value)
                .with_context(|| format!("failed to save preference to {}", store.path().display()))?;
        }
    }
    printer.outcomes(&outcomes)?;
    Ok(())
}
