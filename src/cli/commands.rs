//! Command implementations

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::Console;
use crate::app::{AppContainer, DefaultAppContainer, ToolStatus};
use crate::cli::args::{EpisodeArgs, NameArgs, RunArgs, TokenArgs, ToolsArgs};
use crate::domain::model::{PipelineConfig, Token};
use crate::domain::rules::EpisodeName;
use crate::error::EpmuxResult;

/// Execute the run command
pub fn run(config: PipelineConfig, args: RunArgs) -> Result<()> {
    let token = match args.token {
        Some(token) => Token::new(token),
        None => prompt_episode(args.episode, &Console::new())
            .context("Failed to read episode details")?
            .token(),
    };
    info!("Token: {}", token);

    let container = DefaultAppContainer::new(config);
    let output = container
        .pipeline_interactor()
        .run(&token)
        .with_context(|| format!("Pipeline failed for '{}'", token))?;

    println!("{}", output.display());
    Ok(())
}

/// Execute the split command
pub fn split(config: PipelineConfig, args: TokenArgs) -> Result<()> {
    let token = Token::new(args.token);
    DefaultAppContainer::new(config)
        .pipeline_interactor()
        .split(&token)
        .with_context(|| format!("Split failed for '{}'", token))
}

/// Execute the merge command
pub fn merge(config: PipelineConfig, args: TokenArgs) -> Result<()> {
    let token = Token::new(args.token);
    let output = DefaultAppContainer::new(config)
        .pipeline_interactor()
        .merge(&token)
        .with_context(|| format!("Merge failed for '{}'", token))?;

    println!("{}", output.display());
    Ok(())
}

/// Execute the clean command
pub fn clean(config: PipelineConfig, args: TokenArgs) -> Result<()> {
    let token = Token::new(args.token);
    let output = DefaultAppContainer::new(config)
        .pipeline_interactor()
        .clean(&token)
        .with_context(|| format!("Clean failed for '{}'", token))?;

    println!("{}", output.display());
    Ok(())
}

/// Execute the name command
pub fn name(args: NameArgs) -> Result<()> {
    let name = EpisodeName::new(args.show, args.season, args.episode, args.description);
    println!("{}", name);
    Ok(())
}

/// Execute the tools command
pub fn tools(config: PipelineConfig, args: ToolsArgs) -> Result<()> {
    let statuses = DefaultAppContainer::new(config)
        .pipeline_interactor()
        .check_tools();

    if args.json {
        let json = serde_json::to_string_pretty(&statuses)
            .context("Failed to serialize tool status to JSON")?;
        println!("{}", json);
    } else {
        display_tool_statuses(&statuses);
    }

    let missing = statuses.iter().filter(|s| !s.is_available()).count();
    if missing > 0 {
        warn!("{} tool(s) could not be found", missing);
        return Err(anyhow::anyhow!("{} of {} tools missing", missing, statuses.len()));
    }
    Ok(())
}

/// Fill in missing episode fields from the console
fn prompt_episode(args: EpisodeArgs, console: &Console) -> EpmuxResult<EpisodeName> {
    let show = match args.show {
        Some(show) => show,
        None => {
            let mut show = String::new();
            console.read_line("Show title: ", &mut show)?;
            show
        }
    };
    let season = match args.season {
        Some(season) => season,
        None => console.read_parsed("Season number: ")?,
    };
    let episode = match args.episode {
        Some(episode) => episode,
        None => loop {
            let episode: f64 = console.read_parsed("Episode number: ")?;
            if episode.is_finite() && episode >= 0.0 {
                break episode;
            }
            println!("Episode number must be non-negative");
        },
    };
    let description = match args.description {
        Some(description) => description,
        None => {
            let mut description = String::new();
            console.read_line("Description: ", &mut description)?;
            description
        }
    };

    Ok(EpisodeName::new(show, season, episode, description))
}

/// Display tool availability in human-readable format
fn display_tool_statuses(statuses: &[ToolStatus]) {
    println!("External Tools");
    println!("==============");
    for status in statuses {
        match (&status.resolved_path, &status.error) {
            (Some(path), _) => println!("  ✓ {}: {}", status.stage, path.display()),
            (None, Some(error)) => println!("  ✗ {}: {}", status.stage, error),
            (None, None) => println!(
                "  ✗ {}: {}",
                status.stage,
                status.expected_path.display()
            ),
        }
    }
}
