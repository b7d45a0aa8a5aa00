//! Command-line argument definitions

use clap::Args;

/// Parse a non-negative, finite episode number
pub fn parse_episode_number(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !number.is_finite() || number < 0.0 {
        return Err(format!("'{}' must be a non-negative number", value));
    }
    Ok(number)
}

/// Episode metadata; anything omitted is asked for on the console
#[derive(Args, Debug, Default)]
pub struct EpisodeArgs {
    /// Show title
    #[arg(long)]
    pub show: Option<String>,

    /// Season number
    #[arg(long)]
    pub season: Option<u32>,

    /// Episode number (may be fractional, e.g. 5.5)
    #[arg(long, value_parser = parse_episode_number)]
    pub episode: Option<f64>,

    /// Episode description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Use this token instead of building one from episode metadata
    #[arg(short, long, conflicts_with_all = ["show", "season", "episode", "description"])]
    pub token: Option<String>,

    #[command(flatten)]
    pub episode: EpisodeArgs,
}

/// Arguments for the single-stage commands
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Base file name of the episode's artifacts
    #[arg(short, long)]
    pub token: String,
}

/// Arguments for the name command
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Show title
    #[arg(long)]
    pub show: String,

    /// Season number
    #[arg(long)]
    pub season: u32,

    /// Episode number (may be fractional, e.g. 5.5)
    #[arg(long, value_parser = parse_episode_number)]
    pub episode: f64,

    /// Episode description
    #[arg(long)]
    pub description: String,
}

/// Arguments for the tools command
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
