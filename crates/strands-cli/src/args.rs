//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strands_theme::Theme;

/// Theme preferences and page sessions for the Strands site.
#[derive(Debug, Parser)]
#[command(name = "strands", version)]
pub struct Cli {
    /// Preference file (default: <config dir>/strands/preferences.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Page configuration file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this system color scheme instead of asking the OS
    #[arg(long, global = true, value_name = "light|dark")]
    pub system: Option<Theme>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or change the theme preference
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Replay a page session, one step per argument
    Simulate(SimulateArgs),
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the active theme and where it comes from
    Show,

    /// Switch to the other theme and remember the choice
    Toggle,

    /// Follow system color scheme changes
    Watch(WatchArgs),
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Milliseconds between polls
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after this many polls (default: run until interrupted)
    #[arg(long)]
    pub max_polls: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Steps such as `load`, `toggle`, `key:Enter`, `system:dark`, `wait:1000`
    #[arg(required = true, value_name = "STEP")]
    pub steps: Vec<String>,

    /// Section position as `id=offset`, for anchor steps
    #[arg(long = "section", value_name = "ID=OFFSET", value_parser = parse_section)]
    pub sections: Vec<(String, i32)>,

    /// URL of the simulated page, for feature card steps
    #[arg(long, default_value = "")]
    pub location: String,
}

fn parse_section(raw: &str) -> Result<(String, i32), String> {
    let (id, offset) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=OFFSET, got '{}'", raw))?;
    let offset = offset
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid offset in '{}': {}", raw, e))?;
    Ok((id.trim().trim_start_matches('#').to_string(), offset))
}
